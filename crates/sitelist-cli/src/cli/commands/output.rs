//! Shared report for `parse-text` and `parse-file`.

use anyhow::Result;
use serde::Serialize;
use sitelist_core::config::OutputFormat;
use sitelist_core::parser::SiteList;
use sitelist_core::summary::{detected_label, Submission};
use std::io::{self, Write};

/// What both parse commands print. `filename` is only set for uploads.
#[derive(Debug, Serialize)]
pub struct SiteReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub detected: usize,
    pub sites: SiteList,
    pub submit: Submission,
}

impl SiteReport {
    pub fn new(filename: Option<String>, sites: SiteList) -> Self {
        Self {
            filename,
            detected: sites.len(),
            submit: Submission::from_sites(&sites),
            sites,
        }
    }
}

/// Plain: sites one per line on `out`; filename, count and submit state on
/// `diag` so `out` stays pipeable. JSON: the whole report on `out`.
pub fn write_report<O: Write, D: Write>(
    report: &SiteReport,
    format: OutputFormat,
    out: &mut O,
    diag: &mut D,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            if let Some(filename) = &report.filename {
                writeln!(diag, "{filename}")?;
            }
            writeln!(diag, "{}", detected_label(report.detected))?;
            for site in &report.sites {
                writeln!(out, "{site}")?;
            }
            if report.submit.enabled {
                writeln!(diag, "[{}]", report.submit.label)?;
            } else {
                writeln!(diag, "[{}] (disabled: no sites)", report.submit.label)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn print_report(report: &SiteReport, format: OutputFormat) -> Result<()> {
    write_report(
        report,
        format,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
