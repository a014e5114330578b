//! Comparison of the prompt and model mapping key sets.

use std::collections::BTreeMap;

/// Stages that appear in only one of the two mappings.
///
/// Both lists are sorted. An aligned configuration has both lists empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct StageCoverage {
    /// Stages with a prompt file but no model
    prompt_only: Vec<String>,
    /// Stages with a model but no prompt file
    model_only: Vec<String>,
}

impl StageCoverage {
    pub(crate) fn between(
        prompts: &BTreeMap<String, String>,
        models: &BTreeMap<String, String>,
    ) -> Self {
        Self {
            prompt_only: prompts
                .keys()
                .filter(|stage| !models.contains_key(*stage))
                .cloned()
                .collect(),
            model_only: models
                .keys()
                .filter(|stage| !prompts.contains_key(*stage))
                .cloned()
                .collect(),
        }
    }

    /// True when every stage has both a prompt and a model.
    pub fn is_aligned(&self) -> bool {
        self.prompt_only.is_empty() && self.model_only.is_empty()
    }

    /// Splits into `(prompt_only, model_only)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.prompt_only, self.model_only)
    }
}
