//! CLI command handlers, one file per command.

mod bundle_size;
mod completions;
mod output;
mod parse_file;
mod parse_text;

pub use bundle_size::{run_bundle_size, run_set_bundle_size};
pub use completions::{run_completions, run_man};
pub use parse_file::run_parse_file;
pub use parse_text::run_parse_text;
