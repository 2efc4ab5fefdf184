//! `sitelist parse-text [TEXT]` – parse pasted, comma- or newline-separated sites.

use anyhow::{Context, Result};
use sitelist_core::config::OutputFormat;
use sitelist_core::parser::parse_text_input;
use std::io;

use super::output::{print_report, SiteReport};

pub fn run_parse_text(text: Option<String>, format: OutputFormat) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => io::read_to_string(io::stdin()).context("read stdin")?,
    };
    let sites = parse_text_input(&text);
    tracing::debug!(count = sites.len(), "parsed text input");
    print_report(&SiteReport::new(None, sites), format)
}
