//! File access error types.

/// Kinds of file access errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FileErrorKind {
    /// File does not exist
    #[display("File not found: {}", _0)]
    NotFound(String),
    /// Failed to read file
    #[display("Failed to read file: {}", _0)]
    Read(String),
    /// Failed to list a directory
    #[display("Failed to list directory: {}", _0)]
    ListDirectory(String),
    /// Failed to create a directory
    #[display("Failed to create directory: {}", _0)]
    DirectoryCreation(String),
}

/// File access error with location tracking.
///
/// # Examples
///
/// ```
/// use storyline_error::{FileError, FileErrorKind};
///
/// let err = FileError::new(FileErrorKind::NotFound("agent/prompts/viewer.md".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("File Error: {} at line {} in {}", kind, line, file)]
pub struct FileError {
    /// The kind of error that occurred
    pub kind: FileErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FileError {
    /// Create a new file error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
