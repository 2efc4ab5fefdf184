pub mod config;
pub mod logging;

pub mod bundle_size;
pub mod loader;
pub mod parser;
pub mod picker;
pub mod summary;
