//! System prompt files.

use crate::io::read_trimmed;
use std::path::{Path, PathBuf};
use storyline_config::PipelineConfig;
use storyline_error::StorylineResult;
use tracing::{debug, instrument};

/// Reads stage prompts from the configured prompts directory.
///
/// # Example
///
/// ```no_run
/// use storyline_config::PipelineConfig;
/// use storyline_prompts::PromptLibrary;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PipelineConfig::load_layered()?;
/// let library = PromptLibrary::new(&config);
/// let prompt = library.read("story_optimization")?;
/// println!("{}", prompt);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PromptLibrary<'a> {
    config: &'a PipelineConfig,
}

impl<'a> PromptLibrary<'a> {
    /// Create a library over `config`.
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// The configuration prompts are resolved against.
    pub fn config(&self) -> &'a PipelineConfig {
        self.config
    }

    /// Base directory for prompt files.
    pub fn dir(&self) -> &'a Path {
        self.config.prompts_dir()
    }

    /// Full path of the prompt for `stage`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if `stage` has no prompt mapping.
    pub fn path(&self, stage: impl AsRef<str>) -> StorylineResult<PathBuf> {
        self.config.resolve_prompt(stage)
    }

    /// The trimmed prompt text for `stage`.
    ///
    /// # Errors
    ///
    /// - `LookupError` if `stage` has no prompt mapping
    /// - `FileError` if the prompt file is missing or unreadable
    #[instrument(skip(self, stage), fields(stage = stage.as_ref()))]
    pub fn read(&self, stage: impl AsRef<str>) -> StorylineResult<String> {
        let path = self.config.resolve_prompt(stage)?;
        let prompt = read_trimmed(&path)?;
        debug!(path = %path.display(), chars = prompt.len(), "Read prompt");
        Ok(prompt)
    }

    /// The trimmed contents of `filename` under the prompts directory.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the file is missing or unreadable.
    #[instrument(skip(self))]
    pub fn read_file(&self, filename: &str) -> StorylineResult<String> {
        let path = self.dir().join(filename);
        Ok(read_trimmed(&path)?)
    }
}
