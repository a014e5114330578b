//! Error types for the Storyline library.
//!
//! This crate provides the error taxonomy shared by every Storyline crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! The pipeline configuration surfaces three document-level failures:
//! - [`ParseError`] - the document is not well-formed JSON
//! - [`SchemaError`] - a required field is absent or has the wrong type
//! - [`LookupError`] - a stage name has no entry in a mapping
//!
//! # Examples
//!
//! ```
//! use storyline_error::{LookupError, LookupErrorKind, StorylineResult};
//!
//! fn resolve(stage: &str) -> StorylineResult<String> {
//!     Err(LookupError::new(LookupErrorKind::Model(stage.to_string())))?
//! }
//!
//! match resolve("nonexistent_stage") {
//!     Ok(model) => println!("Model: {}", model),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod file;
mod lookup;
mod parse;
mod schema;

pub use config::ConfigError;
pub use error::{StorylineError, StorylineErrorKind, StorylineResult};
pub use file::{FileError, FileErrorKind};
pub use lookup::{LookupError, LookupErrorKind};
pub use parse::ParseError;
pub use schema::{SchemaError, SchemaErrorKind};
