//! Prompt files, reference templates and agent rosters.
//!
//! This crate reads the files a [`PipelineConfig`](storyline_config::PipelineConfig)
//! points at:
//!
//! - [`PromptLibrary`] - system prompts under `default_prompts_dir`
//! - [`TemplateCatalog`] - reference story and storyboard templates under
//!   `default_templates_dir`
//! - [`AgentRoster`] - one [`AgentSpec`] per stage, pairing its prompt text
//!   with its model
//!
//! Nothing here calls a model; the roster is handed to whatever runs the stages.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod io;
mod library;
mod roster;
mod templates;

pub use library::PromptLibrary;
pub use roster::{AgentRoster, AgentSpec};
pub use templates::{TemplateCatalog, TemplateKind};
