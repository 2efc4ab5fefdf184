//! CLI for sitelist.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use sitelist_core::config::{self, OutputFormat};
use sitelist_core::parser::FileTrim;
use std::path::PathBuf;

use commands::{
    run_bundle_size, run_completions, run_man, run_parse_file, run_parse_text,
    run_set_bundle_size,
};

/// Top-level CLI for sitelist.
#[derive(Debug, Parser)]
#[command(name = "sitelist")]
#[command(about = "Turn pasted text or CSV uploads into site lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format override; the config's `output` is used when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse comma- or newline-separated sites from TEXT (stdin when omitted).
    ParseText {
        /// Text as typed into the site field.
        text: Option<String>,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Parse uploaded .csv/.txt files (first column is the site). When several
    /// files are given they are picked in order and only the last one counts.
    ParseFile {
        /// Files to pick, in order.
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Trim whitespace around file entries (overrides config `file_trim`).
        #[arg(long)]
        trim: bool,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Show the bundle size selected by a page URL's `bundle_size` parameter.
    BundleSize {
        /// Page URL.
        url: String,
        /// JSON product catalog (overrides config `products_path`).
        #[arg(long, value_name = "FILE")]
        products: Option<PathBuf>,
    },

    /// Rewrite a page URL to carry the given bundle size (1 removes the parameter).
    SetBundleSize {
        /// Page URL.
        url: String,
        /// Bundle size to select.
        size: u32,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Generated docs don't need config on disk.
        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::ParseText { text, format } => {
                run_parse_text(text, format.map_or(cfg.output, Into::into))?;
            }
            CliCommand::ParseFile {
                paths,
                trim,
                format,
            } => {
                let file_trim = if trim { FileTrim::Trim } else { cfg.file_trim };
                run_parse_file(&paths, file_trim, format.map_or(cfg.output, Into::into)).await?;
            }
            CliCommand::BundleSize { url, products } => {
                let products = products.or(cfg.products_path);
                run_bundle_size(&url, products.as_deref())?;
            }
            CliCommand::SetBundleSize { url, size } => run_set_bundle_size(&url, size)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
