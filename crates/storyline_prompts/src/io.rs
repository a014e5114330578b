//! Shared file reading helpers.

use std::io::ErrorKind;
use std::path::Path;
use storyline_error::{FileError, FileErrorKind};

/// Read `path` as UTF-8 and trim surrounding whitespace.
#[track_caller]
pub(crate) fn read_trimmed(path: &Path) -> Result<String, FileError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(FileError::new(FileErrorKind::NotFound(
            path.display().to_string(),
        ))),
        Err(e) => Err(FileError::new(FileErrorKind::Read(format!(
            "{}: {}",
            path.display(),
            e
        )))),
    }
}
