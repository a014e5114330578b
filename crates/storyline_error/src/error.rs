//! Top-level error wrapper types.

use crate::{ConfigError, FileError, LookupError, ParseError, SchemaError};

/// Every error condition a Storyline operation can report.
///
/// # Examples
///
/// ```
/// use storyline_error::{ParseError, StorylineError, StorylineErrorKind};
///
/// let err: StorylineError = ParseError::new("trailing comma").into();
/// assert!(matches!(err.kind(), StorylineErrorKind::Parse(_)));
/// assert!(format!("{}", err).contains("Parse Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorylineErrorKind {
    /// Malformed document
    #[from(ParseError)]
    Parse(ParseError),
    /// Missing or mistyped required field
    #[from(SchemaError)]
    Schema(SchemaError),
    /// Stage absent from a mapping
    #[from(LookupError)]
    Lookup(LookupError),
    /// File access error
    #[from(FileError)]
    File(FileError),
    /// Environment-derived settings error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Storyline error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyline_error::{SchemaError, SchemaErrorKind, StorylineResult};
///
/// fn might_fail() -> StorylineResult<()> {
///     Err(SchemaError::new(SchemaErrorKind::MissingField(
///         "agent_model_mapping".to_string(),
///     )))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyline Error: {}", _0)]
pub struct StorylineError(Box<StorylineErrorKind>);

impl StorylineError {
    /// Create a new error from a kind.
    pub fn new(kind: StorylineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorylineErrorKind {
        &self.0
    }

    /// True when the error is a missing stage mapping.
    pub fn is_lookup(&self) -> bool {
        matches!(self.kind(), StorylineErrorKind::Lookup(_))
    }
}

// Generic From implementation for any type that converts to StorylineErrorKind
impl<T> From<T> for StorylineError
where
    T: Into<StorylineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyline operations.
pub type StorylineResult<T> = std::result::Result<T, StorylineError>;
