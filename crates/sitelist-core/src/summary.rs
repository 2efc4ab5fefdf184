//! Form summary derived from a parsed list: detected count and submit control.
//!
//! Labels are plain English; translating them is left to the caller.

use serde::Serialize;

use crate::parser::SiteList;

/// State of the "add sites" submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Submitting is only possible with at least one site.
    pub enabled: bool,
    pub label: String,
}

impl Submission {
    pub fn from_sites(sites: &SiteList) -> Self {
        let label = if sites.is_empty() {
            "Add sites".to_string()
        } else {
            format!("Add {} sites", sites.len())
        };
        Self {
            enabled: !sites.is_empty(),
            label,
        }
    }
}

/// Count line shown under an uploaded file's name.
pub fn detected_label(count: usize) -> String {
    format!("{count} sites detected")
}
