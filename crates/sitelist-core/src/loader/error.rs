//! Error type for upload loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Picked file is not `.csv` or `.txt`.
    #[error("unsupported file type: {} (expected .csv or .txt)", .path.display())]
    UnsupportedExtension { path: PathBuf },
    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Background read task panicked or was cancelled.
    #[error("load task failed")]
    Task(#[from] tokio::task::JoinError),
}
