//! Configuration for the penman binary.
//!
//! Loaded once at startup. The library types never read the environment;
//! the binary resolves the API key and passes it down explicitly.

use penman_core::{Complexity, ContentFocus, Language, Tone};
use penman_error::{ConfigError, PenmanResult};
use penman_models::GeminiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Top-level configuration loaded from `penman.toml`.
///
/// ```toml
/// [gemini]
/// model = "gemini-2.0-flash-exp"
/// timeout_secs = 60
///
/// [defaults]
/// tone = "Conversational"
/// creativity = 7
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PenmanConfig {
    /// API key; the `GEMINI_API_KEY` environment variable takes precedence
    #[serde(default)]
    pub api_key: Option<String>,
    /// Remote service settings
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Style used when the command line leaves a choice open
    #[serde(default)]
    pub defaults: StyleDefaults,
}

/// Per-user style defaults. Unset fields fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDefaults {
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub complexity: Option<Complexity>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub creativity: Option<i32>,
    #[serde(default)]
    pub content_focus: Option<ContentFocus>,
}

impl PenmanConfig {
    /// Load configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PenmanResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> PenmanResult<Self> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)).into())
    }

    /// Load from `explicit` if given, else from [`default_path`](Self::default_path)
    /// if that file exists, else use built-in defaults.
    pub fn load(explicit: Option<&Path>) -> PenmanResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "Using default config file");
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/penman/penman.toml`, e.g. `~/.config/penman/penman.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("penman").join("penman.toml"))
    }

    /// Picks the API key: `from_env` (the value of [`API_KEY_ENV`], if set)
    /// wins over the file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither source provides a
    /// non-blank key.
    pub fn resolve_api_key(&self, from_env: Option<String>) -> PenmanResult<String> {
        from_env
            .into_iter()
            .chain(self.api_key.clone())
            .find(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "{} not set and no api_key in configuration",
                    API_KEY_ENV
                ))
                .into()
            })
    }
}
