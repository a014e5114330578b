//! Document schema error types.

/// Specific schema violations in a pipeline configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SchemaErrorKind {
    /// The document root is not an object
    #[display("Document root must be an object, found {}", _0)]
    NotAnObject(String),
    /// A required top-level field is absent
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// A field is present but holds the wrong type
    #[display("Field '{}' must be {}, found {}", field, expected, found)]
    WrongType {
        /// Path of the offending field
        field: String,
        /// Expected type description
        expected: String,
        /// Actual JSON type found
        found: String,
    },
    /// Prompt and model mappings name different stages
    #[display(
        "Stage mappings diverge: prompt-only [{}], model-only [{}]",
        prompt_only.join(", "),
        model_only.join(", ")
    )]
    MismatchedStages {
        /// Stages with a prompt but no model
        prompt_only: Vec<String>,
        /// Stages with a model but no prompt
        model_only: Vec<String>,
    },
    /// Any other deserialization failure reported by the loader
    #[display("Invalid document: {}", _0)]
    Invalid(String),
}

/// Schema error with location tracking.
///
/// # Examples
///
/// ```
/// use storyline_error::{SchemaError, SchemaErrorKind};
///
/// let err = SchemaError::new(SchemaErrorKind::MissingField(
///     "default_templates_dir".to_string(),
/// ));
/// assert!(format!("{}", err).contains("default_templates_dir"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Schema Error: {} at line {} in {}", kind, line, file)]
pub struct SchemaError {
    /// The kind of error that occurred
    pub kind: SchemaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SchemaError {
    /// Create a new schema error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SchemaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
