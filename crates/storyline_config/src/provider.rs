//! Model provider selection from the environment.

use std::fmt;
use storyline_error::{ConfigError, StorylineResult};
use tracing::{debug, instrument};

/// Environment variable naming the provider backend.
const PROVIDER_VAR: &str = "MODEL_PROVIDER";

/// Environment variable holding an optional HTTP proxy for the Google backend.
const PROXY_VAR: &str = "PROXY";

/// Backend that serves the models named in `agent_model_mapping`.
///
/// # Examples
///
/// ```
/// use storyline_config::ModelProvider;
///
/// assert_eq!(ModelProvider::from_selector(Some("google")), ModelProvider::Google);
/// assert_eq!(ModelProvider::from_selector(None), ModelProvider::OpenRouter);
/// assert_eq!(ModelProvider::Google.api_key_var(), "GOOGLE_API_KEY");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModelProvider {
    /// Google Gemini API
    Google,
    /// OpenRouter, the fallback for any other selector
    #[default]
    OpenRouter,
}

impl ModelProvider {
    /// Provider for a `MODEL_PROVIDER` value. Only `google` selects Google.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("google") => Self::Google,
            _ => Self::OpenRouter,
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::Google => "GOOGLE_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
        }
    }
}

/// Provider, credentials and proxy resolved from the environment.
///
/// The API key is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ProviderSettings {
    /// Selected backend
    provider: ModelProvider,
    /// API key for the selected backend
    api_key: String,
    /// HTTP proxy, only honoured for Google
    proxy: Option<String>,
}

impl ProviderSettings {
    /// Resolve settings from the process environment, loading `.env` first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the selected provider's API key is unset or empty.
    #[instrument]
    pub fn from_env() -> StorylineResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
            Err(e) => debug!(error = %e, "No environment file loaded"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyline_config::{ModelProvider, ProviderSettings};
    ///
    /// let settings = ProviderSettings::from_lookup(|name| match name {
    ///     "MODEL_PROVIDER" => Some("google".to_string()),
    ///     "GOOGLE_API_KEY" => Some("secret".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(*settings.provider(), ModelProvider::Google);
    /// assert!(!format!("{:?}", settings).contains("secret"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> StorylineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = ModelProvider::from_selector(lookup(PROVIDER_VAR).as_deref());
        let key_var = provider.api_key_var();

        let api_key = lookup(key_var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new(format!("{} is not set for provider {}", key_var, provider)))?;

        let proxy = match provider {
            ModelProvider::Google => lookup(PROXY_VAR).filter(|proxy| !proxy.trim().is_empty()),
            ModelProvider::OpenRouter => None,
        };

        debug!(%provider, proxy = proxy.is_some(), "Resolved model provider");
        Ok(Self {
            provider,
            api_key,
            proxy,
        })
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("proxy", &self.proxy)
            .finish()
    }
}
