//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use storyline::TemplateKind;

/// Storyline - inspect and validate pipeline stage configuration
#[derive(Parser, Debug)]
#[command(name = "storyline")]
#[command(about = "Inspect and validate pipeline stage configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to bundled config merged with user overrides)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the configuration document
    Show {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Resolve the prompt file for a stage
    Prompt {
        /// Stage name
        stage: String,

        /// Print the prompt text instead of its path
        #[arg(long)]
        content: bool,
    },

    /// Resolve the model for a stage
    Model {
        /// Stage name
        stage: String,
    },

    /// Load the configuration and report problems
    Validate {
        /// Also require both mappings to name the same stages
        #[arg(long)]
        strict: bool,
    },

    /// List reference templates of a kind
    Templates {
        /// Template kind
        #[arg(value_enum)]
        kind: TemplateArg,
    },

    /// Assemble and print the agent for every prompted stage
    Agents,
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Template kind argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TemplateArg {
    /// Story templates
    Story,
    /// Storyboard templates
    Storyboard,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Story => TemplateKind::Story,
            TemplateArg::Storyboard => TemplateKind::Storyboard,
        }
    }
}
