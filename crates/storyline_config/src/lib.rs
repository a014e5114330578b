//! Pipeline stage configuration.
//!
//! A pipeline configuration document maps each stage name to the prompt file
//! that instructs it and the model that runs it, plus the directories prompts
//! and reference templates are resolved against:
//!
//! ```json
//! {
//!   "agent_prompt_mapping": { "viewer": "viewer.md" },
//!   "agent_model_mapping": { "viewer": "gemini-2.5-pro" },
//!   "default_prompts_dir": "agent/prompts",
//!   "default_templates_dir": "templates"
//! }
//! ```
//!
//! The document is loaded once at startup and never mutated afterwards, so a
//! [`PipelineConfig`] can be shared across threads without locking.
//!
//! Loading supports:
//! - A single explicit file ([`PipelineConfig::load`])
//! - Bundled defaults with user overrides ([`PipelineConfig::load_layered`])

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coverage;
mod pipeline;
mod provider;
mod schema;
mod stage;

pub use coverage::StageCoverage;
pub use pipeline::{DEFAULT_MODEL, PipelineConfig};
pub use provider::{ModelProvider, ProviderSettings};
pub use stage::Stage;
