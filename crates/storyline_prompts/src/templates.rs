//! Reference story and storyboard templates.
//!
//! Templates are example documents a stage may be shown as guidance. They
//! live in one subdirectory per kind:
//!
//! ```text
//! templates/
//! ├── story/
//! │   └── fable.md
//! └── storyboard/
//!     └── three_act.md
//! ```

use crate::io::read_trimmed;
use std::path::{Path, PathBuf};
use storyline_config::PipelineConfig;
use storyline_error::{FileError, FileErrorKind, StorylineResult};
use tracing::{debug, info, instrument, warn};

/// Extension of files counted as templates.
const TEMPLATE_EXTENSION: &str = "md";

/// Kind of reference template, named after its subdirectory.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TemplateKind {
    /// Story templates, used when optimizing a story
    Story,
    /// Storyboard templates, used when designing shots
    Storyboard,
}

/// Lists and reads templates under a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    base_dir: PathBuf,
}

impl TemplateCatalog {
    /// Create a catalog rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a catalog rooted at the configured `default_templates_dir`.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.templates_dir())
    }

    /// Root directory of the catalog.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding templates of `kind`.
    pub fn dir(&self, kind: TemplateKind) -> PathBuf {
        self.base_dir.join(kind.as_ref())
    }

    /// Full path of `filename` among templates of `kind`.
    pub fn path(&self, kind: TemplateKind, filename: &str) -> PathBuf {
        self.dir(kind).join(filename)
    }

    /// Create the story and storyboard directories if they are missing.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if a directory cannot be created.
    #[instrument(skip(self), fields(base = %self.base_dir.display()))]
    pub fn ensure_dirs(&self) -> StorylineResult<()> {
        for kind in [TemplateKind::Story, TemplateKind::Storyboard] {
            let dir = self.dir(kind);
            std::fs::create_dir_all(&dir).map_err(|e| {
                FileError::new(FileErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    dir.display(),
                    e
                )))
            })?;
        }
        info!("Template directories ready");
        Ok(())
    }

    /// Sorted file names of the `.md` templates of `kind`.
    ///
    /// A missing directory has no templates.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the directory exists but cannot be listed.
    #[instrument(skip(self))]
    pub fn list(&self, kind: TemplateKind) -> StorylineResult<Vec<String>> {
        let dir = self.dir(kind);
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "Template directory does not exist");
            return Ok(Vec::new());
        }

        let list_error = |e: std::io::Error| {
            FileError::new(FileErrorKind::ListDirectory(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(list_error)? {
            let path = entry.map_err(list_error)?.path();
            let is_template = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(TEMPLATE_EXTENSION);
            if !is_template {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();

        debug!(count = names.len(), "Listed templates");
        Ok(names)
    }

    /// The trimmed contents of template `filename`, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the file exists but cannot be read.
    #[instrument(skip(self))]
    pub fn read(&self, kind: TemplateKind, filename: &str) -> StorylineResult<Option<String>> {
        let path = self.path(kind, filename);
        match read_trimmed(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if matches!(e.kind, FileErrorKind::NotFound(_)) => {
                warn!(path = %path.display(), "Template not found");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
