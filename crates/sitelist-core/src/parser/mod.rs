//! Site-list parsing for pasted text and uploaded CSV/TXT content.
//!
//! Both entry points are pure and never fail: malformed input yields a
//! best-effort (possibly empty) list.

mod site_list;

use serde::{Deserialize, Serialize};

pub use site_list::SiteList;

/// First-column value of a CSV header row; never treated as a site.
pub const HEADER_SENTINEL: &str = "url";

/// How entries parsed from file content are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileTrim {
    /// Keep the first field exactly as it appears in the file.
    #[default]
    Preserve,
    /// Trim surrounding whitespace, like the text path does.
    Trim,
}

/// Raw user input, as handed over by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Free-form text, comma- or newline-separated.
    Text(String),
    /// Text content of an uploaded file; first column of each line is significant.
    File(String),
}

impl RawInput {
    pub fn parse(&self, file_trim: FileTrim) -> SiteList {
        match self {
            RawInput::Text(text) => parse_text_input(text),
            RawInput::File(content) => parse_file_content_with(content, file_trim),
        }
    }
}

/// Parses pasted text: splits on `,` or `\n`, trims each piece and drops
/// pieces that are empty after trimming.
///
/// # Examples
///
/// - `parse_text_input("a.com, b.com\nc.com")` → `["a.com", "b.com", "c.com"]`
/// - `parse_text_input("  , ,a.com")` → `["a.com"]`
pub fn parse_text_input(text: &str) -> SiteList {
    if text.is_empty() {
        return SiteList::new();
    }
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses file content with the default [`FileTrim::Preserve`] normalization.
pub fn parse_file_content(content: &str) -> SiteList {
    parse_file_content_with(content, FileTrim::default())
}

/// Parses CSV-like file content: one record per line (`\r\n` or `\n`), first
/// comma-separated field is the site. A first field equal to `url` after
/// trimming is a header and is skipped; later fields are ignored.
///
/// Blank first fields (empty lines, trailing newline, `,x` rows) are dropped.
pub fn parse_file_content_with(content: &str, file_trim: FileTrim) -> SiteList {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(first_field)
        .filter(|field| {
            let trimmed = field.trim();
            !trimmed.is_empty() && trimmed != HEADER_SENTINEL
        })
        .map(|field| match file_trim {
            FileTrim::Preserve => field.to_string(),
            FileTrim::Trim => field.trim().to_string(),
        })
        .collect()
}

fn first_field(line: &str) -> &str {
    line.split_once(',').map_or(line, |(first, _)| first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_empty_is_empty_list() {
        assert!(parse_text_input("").is_empty());
    }

    #[test]
    fn text_splits_on_comma_and_newline() {
        assert_eq!(
            parse_text_input("a.com, b.com\nc.com").into_vec(),
            vec!["a.com", "b.com", "c.com"]
        );
    }

    #[test]
    fn text_drops_blank_pieces() {
        assert_eq!(parse_text_input("  , ,a.com").into_vec(), vec!["a.com"]);
        assert!(parse_text_input(" \n , \n").is_empty());
    }

    #[test]
    fn text_trims_carriage_returns() {
        assert_eq!(
            parse_text_input("a.com\r\nb.com\r\n").into_vec(),
            vec!["a.com", "b.com"]
        );
    }

    #[test]
    fn text_keeps_duplicates_in_order() {
        assert_eq!(
            parse_text_input("b.com,a.com,b.com").into_vec(),
            vec!["b.com", "a.com", "b.com"]
        );
    }

    #[test]
    fn text_reparse_of_joined_output_is_stable() {
        for input in ["a.com, b.com\nc.com", "  , ,a.com", "x\n\n y ,z,,"] {
            let first = parse_text_input(input);
            let second = parse_text_input(&first.join(","));
            assert_eq!(first, second, "input {input:?}");
        }
    }

    #[test]
    fn file_skips_header_and_extra_fields() {
        assert_eq!(
            parse_file_content("url\na.com\nb.com,ignored").into_vec(),
            vec!["a.com", "b.com"]
        );
    }

    #[test]
    fn file_empty_is_empty_list() {
        assert!(parse_file_content("").is_empty());
    }

    #[test]
    fn file_handles_crlf_and_trailing_newline() {
        assert_eq!(
            parse_file_content("url,name\r\na.com,A\r\nb.com,B\r\n").into_vec(),
            vec!["a.com", "b.com"]
        );
    }

    #[test]
    fn file_header_match_is_exact_and_case_sensitive() {
        assert_eq!(
            parse_file_content(" url \nURL\nurls.com\nmy-url.org").into_vec(),
            vec!["URL", "urls.com", "my-url.org"]
        );
    }

    #[test]
    fn file_header_excluded_anywhere() {
        assert_eq!(
            parse_file_content("a.com\nurl\nb.com").into_vec(),
            vec!["a.com", "b.com"]
        );
    }

    #[test]
    fn file_preserves_whitespace_by_default() {
        assert_eq!(
            parse_file_content(" a.com ,x\nb.com\t").into_vec(),
            vec![" a.com ", "b.com\t"]
        );
    }

    #[test]
    fn file_trim_mode_normalizes_entries() {
        assert_eq!(
            parse_file_content_with(" a.com ,x\nb.com\t", FileTrim::Trim).into_vec(),
            vec!["a.com", "b.com"]
        );
    }

    #[test]
    fn file_drops_blank_first_fields() {
        assert_eq!(
            parse_file_content("\n,orphan\n   \na.com\n\n").into_vec(),
            vec!["a.com"]
        );
    }

    #[test]
    fn raw_input_dispatches_to_matching_path() {
        let text = RawInput::Text("a.com,b.com".to_string());
        let file = RawInput::File("a.com,b.com".to_string());
        assert_eq!(text.parse(FileTrim::Preserve).len(), 2);
        assert_eq!(file.parse(FileTrim::Preserve).into_vec(), vec!["a.com"]);
    }

    #[test]
    fn file_trim_config_names() {
        #[derive(Deserialize)]
        struct Wrap {
            mode: FileTrim,
        }
        let w: Wrap = toml::from_str(r#"mode = "trim""#).unwrap();
        assert_eq!(w.mode, FileTrim::Trim);
        let w: Wrap = toml::from_str(r#"mode = "preserve""#).unwrap();
        assert_eq!(w.mode, FileTrim::Preserve);
    }
}
