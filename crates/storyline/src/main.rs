//! Storyline CLI binary.
//!
//! This binary provides command-line access to the pipeline configuration:
//! - Print and validate the configuration document
//! - Resolve the prompt and model for a stage
//! - List reference templates and assemble the agent roster

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli::load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Show { format } => cli::show(&config, format)?,
        Commands::Prompt { stage, content } => cli::prompt(&config, &stage, content)?,
        Commands::Model { stage } => cli::model(&config, &stage)?,
        Commands::Validate { strict } => cli::validate(&config, strict)?,
        Commands::Templates { kind } => cli::templates(&config, kind)?,
        Commands::Agents => cli::agents(&config)?,
    }

    Ok(())
}
