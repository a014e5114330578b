//! Per-stage agent specifications.

use crate::PromptLibrary;
use serde::Serialize;
use std::path::PathBuf;
use storyline_error::StorylineResult;
use tracing::{info, instrument};

/// Everything needed to stand up the agent for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct AgentSpec {
    /// Stage name
    stage: String,
    /// Model identifier, the default model when the stage has no mapping
    model: String,
    /// Resolved prompt file path
    prompt_path: PathBuf,
    /// Trimmed system prompt text
    system_prompt: String,
}

/// Agent specifications for every stage that has a prompt mapping.
///
/// Stages with only a model mapping are skipped: without a prompt there is
/// no agent to build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentRoster {
    agents: Vec<AgentSpec>,
}

impl AgentRoster {
    /// Read the prompt and resolve the model for each prompted stage, in stage order.
    ///
    /// # Errors
    ///
    /// Returns the first `FileError` hit while reading a prompt; no partial
    /// roster is produced.
    #[instrument(skip(library))]
    pub fn assemble(library: &PromptLibrary<'_>) -> StorylineResult<Self> {
        let config = library.config();

        let agents = config
            .agent_prompt_mapping()
            .keys()
            .map(|stage| -> StorylineResult<AgentSpec> {
                Ok(AgentSpec {
                    stage: stage.clone(),
                    model: config.model_or_default(stage).to_string(),
                    prompt_path: library.path(stage)?,
                    system_prompt: library.read(stage)?,
                })
            })
            .collect::<StorylineResult<Vec<_>>>()?;

        info!(count = agents.len(), "All agents assembled");
        Ok(Self { agents })
    }

    /// The agent for `stage`, if it was assembled.
    pub fn get(&self, stage: impl AsRef<str>) -> Option<&AgentSpec> {
        let stage = stage.as_ref();
        self.agents.iter().find(|agent| agent.stage == stage)
    }

    /// Agents in stage order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentSpec> {
        self.agents.iter()
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True when no stage had a prompt mapping.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl<'a> IntoIterator for &'a AgentRoster {
    type Item = &'a AgentSpec;
    type IntoIter = std::slice::Iter<'a, AgentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
