//! Storyline - pipeline stage configuration
//!
//! Storyline loads the document that tells an animation script pipeline which
//! prompt and which model each stage uses, and resolves lookups against it.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storyline::{PipelineConfig, PromptLibrary, Stage};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::load("agent/config/pipeline_config.json")?;
//!
//!     let model = config.resolve_model(Stage::Reviewer)?;
//!     let prompt = PromptLibrary::new(&config).read(Stage::Reviewer)?;
//!     println!("{} <- {} chars of prompt", model, prompt.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyline_error` - Error types
//! - `storyline_config` - The configuration document, loading and lookups
//! - `storyline_prompts` - Prompt files, reference templates, agent rosters
//!
//! This crate re-exports everything for convenience.

pub use storyline_config::*;
pub use storyline_error::*;
pub use storyline_prompts::*;

pub mod report;
