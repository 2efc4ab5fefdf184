//! Upload loader: read a picked file asynchronously and parse it.
//!
//! Every pick gets a generation from a shared monotonic counter. A read that
//! completes after a newer pick was made is reported as superseded instead of
//! overwriting the newer result, so out-of-order completions are harmless.

mod error;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use crate::parser::{parse_file_content_with, FileTrim, SiteList};
use crate::picker;

pub use error::LoadError;

/// A file chosen by the user, tagged with its pick generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub generation: u64,
    pub path: PathBuf,
    pub filename: String,
}

/// Parsed upload, handed to the caller's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedSites {
    pub filename: String,
    pub sites: SiteList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(UploadedSites),
    /// A newer pick exists; this result must be ignored.
    Superseded { generation: u64, filename: String },
}

#[derive(Debug, Clone, Default)]
pub struct SiteListLoader {
    file_trim: FileTrim,
    latest: Arc<AtomicU64>,
}

impl SiteListLoader {
    pub fn new(file_trim: FileTrim) -> Self {
        Self {
            file_trim,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a pick. Any pick made earlier becomes stale.
    pub fn pick(&self, path: impl Into<PathBuf>) -> Pick {
        let path = path.into();
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let filename = picker::display_filename(&path);
        tracing::debug!(generation, file = %filename, "file picked");
        Pick {
            generation,
            path,
            filename,
        }
    }

    /// True while no newer pick has been made.
    pub fn is_current(&self, pick: &Pick) -> bool {
        self.latest.load(Ordering::SeqCst) == pick.generation
    }

    /// Read and parse the picked file.
    ///
    /// A stale pick is reported as `Superseded` before its file is checked
    /// or read, and currency is checked again once parsing is done, so only
    /// the latest pick can return `Loaded` or an error.
    pub async fn load(&self, pick: Pick) -> Result<LoadOutcome, LoadError> {
        if !self.is_current(&pick) {
            return Ok(superseded(pick));
        }
        if !picker::is_accepted_file(&pick.path) {
            return Err(LoadError::UnsupportedExtension { path: pick.path });
        }
        let bytes = match tokio::fs::read(&pick.path).await {
            Ok(bytes) => bytes,
            Err(_) if !self.is_current(&pick) => return Ok(superseded(pick)),
            Err(source) => {
                return Err(LoadError::Read {
                    path: pick.path,
                    source,
                })
            }
        };
        Ok(self.finish(pick, &bytes))
    }

    /// Parse read content into the outcome for `pick`.
    fn finish(&self, pick: Pick, bytes: &[u8]) -> LoadOutcome {
        let content = String::from_utf8_lossy(bytes);
        let sites = parse_file_content_with(&content, self.file_trim);
        if !self.is_current(&pick) {
            return superseded(pick);
        }
        tracing::info!(file = %pick.filename, count = sites.len(), "upload parsed");
        LoadOutcome::Loaded(UploadedSites {
            filename: pick.filename,
            sites,
        })
    }

    /// Pick `paths` in order and read them concurrently. Only the last pick can
    /// win; failures of superseded reads are logged and ignored.
    ///
    /// Returns `None` when `paths` is empty.
    pub async fn pick_and_load<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<Option<UploadedSites>, LoadError> {
        let picks: Vec<Pick> = paths
            .iter()
            .map(|p| self.pick(p.as_ref().to_path_buf()))
            .collect();
        let Some(last) = picks.last().map(|p| p.generation) else {
            return Ok(None);
        };

        let mut tasks = JoinSet::new();
        for pick in picks {
            let loader = self.clone();
            tasks.spawn(async move {
                let generation = pick.generation;
                (generation, loader.load(pick).await)
            });
        }

        let mut winner = None;
        while let Some(joined) = tasks.join_next().await {
            let (generation, result) = joined?;
            match result {
                Ok(LoadOutcome::Loaded(uploaded)) => winner = Some(uploaded),
                Ok(LoadOutcome::Superseded { .. }) => {}
                Err(err) if generation == last => return Err(err),
                Err(err) => {
                    tracing::warn!(generation, "superseded upload failed: {err:#}");
                }
            }
        }
        Ok(winner)
    }
}

fn superseded(pick: Pick) -> LoadOutcome {
    tracing::debug!(
        generation = pick.generation,
        file = %pick.filename,
        "discarding superseded upload"
    );
    LoadOutcome::Superseded {
        generation: pick.generation,
        filename: pick.filename,
    }
}
