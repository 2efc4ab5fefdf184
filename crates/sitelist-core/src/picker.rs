//! Upload acceptance: which picked files are read at all.

use std::path::Path;

/// File extensions the upload accepts (compared case-insensitively).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// True when `path` has a `.csv` or `.txt` extension.
pub fn is_accepted_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}

/// Name shown next to the upload result: the last path component.
pub fn display_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
