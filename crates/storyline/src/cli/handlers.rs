//! Command handlers.

use super::commands::{OutputFormat, TemplateArg};
use std::path::Path;
use storyline::{
    AgentRoster, PipelineConfig, PromptLibrary, StorylineResult, TemplateCatalog, report,
};
use tracing::info;

/// Load from `path` when given, otherwise layer user overrides over the bundled defaults.
pub fn load_config(path: Option<&Path>) -> StorylineResult<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path),
        None => PipelineConfig::load_layered(),
    }
}

/// Print the configuration document.
pub fn show(config: &PipelineConfig, format: OutputFormat) -> StorylineResult<()> {
    match format {
        OutputFormat::Human => print!("{}", report::config_summary(config)),
        OutputFormat::Json => println!("{}", config.to_json_string()?),
    }
    Ok(())
}

/// Print the prompt path, or its contents, for `stage`.
pub fn prompt(config: &PipelineConfig, stage: &str, content: bool) -> StorylineResult<()> {
    let library = PromptLibrary::new(config);
    if content {
        println!("{}", library.read(stage)?);
    } else {
        println!("{}", library.path(stage)?.display());
    }
    Ok(())
}

/// Print the model for `stage`.
pub fn model(config: &PipelineConfig, stage: &str) -> StorylineResult<()> {
    println!("{}", config.resolve_model(stage)?);
    Ok(())
}

/// Report whether the configuration is usable.
pub fn validate(config: &PipelineConfig, strict: bool) -> StorylineResult<()> {
    if strict {
        config.validate_strict()?;
    }
    info!(stages = config.stages().len(), strict, "Configuration is valid");
    println!("ok: {} stages", config.stages().len());
    Ok(())
}

/// List templates of `kind`.
pub fn templates(config: &PipelineConfig, kind: TemplateArg) -> StorylineResult<()> {
    let catalog = TemplateCatalog::from_config(config);
    for name in catalog.list(kind.into())? {
        println!("{}", name);
    }
    Ok(())
}

/// Assemble and print the agent roster.
pub fn agents(config: &PipelineConfig) -> StorylineResult<()> {
    let roster = AgentRoster::assemble(&PromptLibrary::new(config))?;
    print!("{}", report::roster_summary(&roster));
    Ok(())
}
