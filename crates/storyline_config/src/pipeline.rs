//! The pipeline configuration document and its lookups.

use crate::{StageCoverage, schema};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use storyline_error::{
    FileError, FileErrorKind, LookupError, LookupErrorKind, ParseError, SchemaError,
    SchemaErrorKind, StorylineResult,
};
use tracing::{debug, instrument, warn};

/// Model used by [`PipelineConfig::model_or_default`] for stages without a model mapping.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// File name searched for user overrides by [`PipelineConfig::load_layered`].
const CONFIG_FILE_NAME: &str = "pipeline_config.json";

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../pipeline_config.json");

/// Stage-to-prompt and stage-to-model mappings for the pipeline.
///
/// Mappings are kept in sorted order so serialization is deterministic.
///
/// # Example
///
/// ```
/// use storyline_config::PipelineConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PipelineConfig::from_json_str(r#"{
///     "agent_prompt_mapping": { "viewer": "viewer.md" },
///     "agent_model_mapping": { "viewer": "gemini-2.5-pro" },
///     "default_prompts_dir": "agent/prompts",
///     "default_templates_dir": "templates"
/// }"#)?;
///
/// assert_eq!(config.resolve_model("viewer")?, "gemini-2.5-pro");
/// assert_eq!(
///     config.resolve_prompt("viewer")?,
///     std::path::Path::new("agent/prompts/viewer.md")
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PipelineConfig {
    /// Stage name to prompt file name, relative to `default_prompts_dir`
    agent_prompt_mapping: BTreeMap<String, String>,

    /// Stage name to model identifier
    agent_model_mapping: BTreeMap<String, String>,

    /// Base directory for prompt files
    default_prompts_dir: String,

    /// Base directory for reference templates
    default_templates_dir: String,
}

impl PipelineConfig {
    /// Build a configuration directly from its parts.
    pub fn new(
        agent_prompt_mapping: BTreeMap<String, String>,
        agent_model_mapping: BTreeMap<String, String>,
        default_prompts_dir: impl Into<String>,
        default_templates_dir: impl Into<String>,
    ) -> Self {
        Self {
            agent_prompt_mapping,
            agent_model_mapping,
            default_prompts_dir: default_prompts_dir.into(),
            default_templates_dir: default_templates_dir.into(),
        }
    }

    /// Load the configuration document at `path`.
    ///
    /// # Errors
    ///
    /// - `FileError` if the file cannot be read
    /// - `ParseError` if the contents are not well-formed JSON
    /// - `SchemaError` if a required field is absent or mistyped
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> StorylineResult<Self> {
        let path = path.as_ref();
        debug!("Loading pipeline configuration from file");

        let text = fs::read_to_string(path).map_err(|e| {
            let kind = match e.kind() {
                ErrorKind::NotFound => FileErrorKind::NotFound(path.display().to_string()),
                _ => FileErrorKind::Read(format!("{}: {}", path.display(), e)),
            };
            FileError::new(kind)
        })?;

        Self::from_json_str(&text)
    }

    /// Parse and validate a configuration document held in memory.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for malformed JSON and `SchemaError` for a
    /// structurally invalid document.
    pub fn from_json_str(text: &str) -> StorylineResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            ParseError::new(format!("Failed to parse pipeline configuration: {}", e))
        })?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> StorylineResult<Self> {
        schema::check_document(&value)?;

        let config: Self = serde_json::from_value(value)
            .map_err(|e| SchemaError::new(SchemaErrorKind::Invalid(e.to_string())))?;

        let coverage = config.stage_coverage();
        if !coverage.is_aligned() {
            warn!(
                prompt_only = ?coverage.prompt_only(),
                model_only = ?coverage.model_only(),
                "Prompt and model mappings name different stages"
            );
        }

        debug!(
            stages = config.agent_prompt_mapping.len(),
            prompts_dir = %config.default_prompts_dir,
            "Pipeline configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (pipeline_config.json shipped with the library)
    /// 2. User config in home directory (~/.config/storyline/pipeline_config.json)
    /// 3. User config in current directory (./pipeline_config.json)
    ///
    /// User config files are optional and skipped when absent. Mappings are
    /// merged key by key, so an override can add or replace stages but not
    /// remove a bundled one.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use storyline_config::PipelineConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = PipelineConfig::load_layered()?;
    /// println!("reviewer runs on {}", config.resolve_model("reviewer")?);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load_layered() -> StorylineResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut overrides = Vec::new();
        if let Some(home) = dirs::home_dir() {
            overrides.push(home.join(".config/storyline").join(CONFIG_FILE_NAME));
        }
        overrides.push(PathBuf::from(CONFIG_FILE_NAME));

        Self::layered_from(&overrides)
    }

    /// Bundled defaults overlaid with each existing file in `overrides`, in order.
    #[instrument(skip(overrides), fields(count = overrides.len()))]
    pub fn layered_from(overrides: &[PathBuf]) -> StorylineResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Json));

        for path in overrides {
            debug!(path = %path.display(), "Adding optional configuration source");
            builder = builder.add_source(
                File::from(path.clone())
                    .format(FileFormat::Json)
                    .required(false),
            );
        }

        let merged = builder.build().map_err(layer_error)?;
        let value: Value = merged.try_deserialize().map_err(layer_error)?;
        Self::from_value(value)
    }

    /// The bundled default configuration.
    pub fn bundled() -> StorylineResult<Self> {
        Self::from_json_str(DEFAULT_CONFIG)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// Reloading the output with [`from_json_str`](Self::from_json_str)
    /// yields an equal configuration.
    pub fn to_json_string(&self) -> StorylineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SchemaError::new(SchemaErrorKind::Invalid(format!(
                "Failed to serialize configuration: {}",
                e
            )))
            .into()
        })
    }

    /// Join `default_prompts_dir` with the prompt file mapped to `stage`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if `stage` has no prompt mapping.
    #[instrument(skip(self, stage), fields(stage = stage.as_ref()))]
    pub fn resolve_prompt(&self, stage: impl AsRef<str>) -> StorylineResult<PathBuf> {
        let filename = self.prompt_file(stage)?;
        Ok(self.prompts_dir().join(filename))
    }

    /// The model identifier mapped to `stage`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if `stage` has no model mapping.
    #[instrument(skip(self, stage), fields(stage = stage.as_ref()))]
    pub fn resolve_model(&self, stage: impl AsRef<str>) -> StorylineResult<&str> {
        let stage = stage.as_ref();
        self.agent_model_mapping
            .get(stage)
            .map(String::as_str)
            .ok_or_else(|| LookupError::new(LookupErrorKind::Model(stage.to_string())).into())
    }

    /// The prompt file name mapped to `stage`, without the directory.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if `stage` has no prompt mapping.
    pub fn prompt_file(&self, stage: impl AsRef<str>) -> StorylineResult<&str> {
        let stage = stage.as_ref();
        self.agent_prompt_mapping
            .get(stage)
            .map(String::as_str)
            .ok_or_else(|| LookupError::new(LookupErrorKind::Prompt(stage.to_string())).into())
    }

    /// The model mapped to `stage`, or [`DEFAULT_MODEL`] when there is none.
    pub fn model_or_default(&self, stage: impl AsRef<str>) -> &str {
        let stage = stage.as_ref();
        match self.agent_model_mapping.get(stage) {
            Some(model) => model,
            None => {
                debug!(stage, default = DEFAULT_MODEL, "No model mapping, using default");
                DEFAULT_MODEL
            }
        }
    }

    /// Every stage named by either mapping, sorted.
    pub fn stages(&self) -> Vec<&str> {
        let mut stages: Vec<&str> = self
            .agent_prompt_mapping
            .keys()
            .chain(self.agent_model_mapping.keys())
            .map(String::as_str)
            .collect();
        stages.sort_unstable();
        stages.dedup();
        stages
    }

    /// Stages present in only one of the two mappings.
    pub fn stage_coverage(&self) -> StageCoverage {
        StageCoverage::between(&self.agent_prompt_mapping, &self.agent_model_mapping)
    }

    /// Require that every stage has both a prompt and a model.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` with [`SchemaErrorKind::MismatchedStages`] when
    /// the key sets differ.
    pub fn validate_strict(&self) -> StorylineResult<()> {
        let coverage = self.stage_coverage();
        if coverage.is_aligned() {
            return Ok(());
        }
        let (prompt_only, model_only) = coverage.into_parts();
        Err(SchemaError::new(SchemaErrorKind::MismatchedStages {
            prompt_only,
            model_only,
        })
        .into())
    }

    /// Base directory for prompt files.
    pub fn prompts_dir(&self) -> &Path {
        Path::new(&self.default_prompts_dir)
    }

    /// Base directory for reference templates.
    pub fn templates_dir(&self) -> &Path {
        Path::new(&self.default_templates_dir)
    }
}

#[track_caller]
fn layer_error(e: config::ConfigError) -> storyline_error::StorylineError {
    match e {
        config::ConfigError::FileParse { .. } => {
            ParseError::new(format!("Failed to parse configuration source: {}", e)).into()
        }
        other => SchemaError::new(SchemaErrorKind::Invalid(format!(
            "Failed to build configuration: {}",
            other
        )))
        .into(),
    }
}
