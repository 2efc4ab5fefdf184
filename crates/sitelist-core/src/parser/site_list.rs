//! Ordered list of site identifiers produced by a parse.

use serde::Serialize;

/// Site identifiers in order of appearance. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SiteList(Vec<String>);

impl SiteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Join entries with `sep` (e.g. `","` to feed the list back into the text path).
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl FromIterator<String> for SiteList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SiteList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SiteList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order_and_keeps_duplicates() {
        let list: SiteList = ["b.com", "a.com", "b.com"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(list.len(), 3);
        assert_eq!(list.join(","), "b.com,a.com,b.com");
    }

    #[test]
    fn serializes_as_json_array() {
        let list: SiteList = vec!["a.com".to_string()].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a.com"]"#);
        assert_eq!(serde_json::to_string(&SiteList::new()).unwrap(), "[]");
    }
}
