//! `sitelist parse-file <PATH>...` – parse uploaded CSV/TXT files; the last pick wins.

use anyhow::{bail, Result};
use sitelist_core::config::OutputFormat;
use sitelist_core::loader::SiteListLoader;
use sitelist_core::parser::FileTrim;
use std::path::PathBuf;

use super::output::{print_report, SiteReport};

pub async fn run_parse_file(
    paths: &[PathBuf],
    file_trim: FileTrim,
    format: OutputFormat,
) -> Result<()> {
    let loader = SiteListLoader::new(file_trim);
    let Some(uploaded) = loader.pick_and_load(paths).await? else {
        bail!("no file given");
    };
    print_report(
        &SiteReport::new(Some(uploaded.filename), uploaded.sites),
        format,
    )
}
