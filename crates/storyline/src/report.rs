//! Human-readable renderings used by the CLI.

use std::fmt::Write;
use storyline_config::PipelineConfig;
use storyline_prompts::AgentRoster;

/// One line per stage: name, model and prompt file, followed by the directories.
///
/// Stages missing from a mapping show `-` in that column.
pub fn config_summary(config: &PipelineConfig) -> String {
    let mut out = String::new();
    let width = config.stages().iter().map(|s| s.len()).max().unwrap_or(0);

    for stage in config.stages() {
        let model = config.resolve_model(stage).unwrap_or("-");
        let prompt = config.prompt_file(stage).unwrap_or("-");
        let _ = writeln!(out, "{:<width$}  {:<20}  {}", stage, model, prompt, width = width);
    }
    let _ = writeln!(out, "prompts:   {}", config.prompts_dir().display());
    let _ = writeln!(out, "templates: {}", config.templates_dir().display());
    out
}

/// One line per agent: stage, model and prompt path.
pub fn roster_summary(roster: &AgentRoster) -> String {
    let mut out = String::new();
    for agent in roster {
        let _ = writeln!(
            out,
            "{}  {}  {}",
            agent.stage(),
            agent.model(),
            agent.prompt_path().display()
        );
    }
    out
}
