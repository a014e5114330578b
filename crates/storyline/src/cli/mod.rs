//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyline binary.

mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{agents, load_config, model, prompt, show, templates, validate};
