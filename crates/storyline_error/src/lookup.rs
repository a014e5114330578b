//! Stage lookup error types.

/// Which mapping a stage lookup missed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LookupErrorKind {
    /// Stage is not a key of `agent_prompt_mapping`
    #[display("Stage '{}' has no entry in agent_prompt_mapping", _0)]
    Prompt(String),
    /// Stage is not a key of `agent_model_mapping`
    #[display("Stage '{}' has no entry in agent_model_mapping", _0)]
    Model(String),
}

impl LookupErrorKind {
    /// The stage name that was not found.
    pub fn stage(&self) -> &str {
        match self {
            Self::Prompt(stage) | Self::Model(stage) => stage,
        }
    }
}

/// Lookup error with location tracking.
///
/// # Examples
///
/// ```
/// use storyline_error::{LookupError, LookupErrorKind};
///
/// let err = LookupError::new(LookupErrorKind::Prompt("nonexistent_stage".to_string()));
/// assert_eq!(err.kind.stage(), "nonexistent_stage");
/// assert!(format!("{}", err).contains("agent_prompt_mapping"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lookup Error: {} at line {} in {}", kind, line, file)]
pub struct LookupError {
    /// The kind of error that occurred
    pub kind: LookupErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LookupError {
    /// Create a new lookup error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LookupErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
