//! Global configuration parsing and validation.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::dictation::RecognizerSettings;
use crate::models::{Category, Filter, Priority};
use crate::{AppError, Result};

/// Initial selections for the shell's input controls.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DefaultsConfig {
    /// Priority preselected for new tasks.
    #[serde(default)]
    pub priority: Priority,
    /// Category preselected for new tasks.
    #[serde(default)]
    pub category: Category,
    /// Filter active at startup. Unknown names fall back to `all`.
    #[serde(default, deserialize_with = "deserialize_filter")]
    pub filter: Filter,
}

/// Speech recognizer settings and the optional external program.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DictationConfig {
    /// Recognition locale.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Whether interim results are requested.
    #[serde(default)]
    pub interim_results: bool,
    /// Number of alternatives requested.
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: u32,
    /// Speech-to-text program; dictation is unavailable when unset.
    #[serde(default)]
    pub command: Option<String>,
    /// Fixed arguments for the program.
    #[serde(default)]
    pub args: Vec<String>,
    /// Seconds before a silent capture is abandoned.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for DictationConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            interim_results: false,
            max_alternatives: default_max_alternatives(),
            command: None,
            args: Vec::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl DictationConfig {
    /// Settings handed to the recognizer on each capture.
    #[must_use]
    pub fn recognizer_settings(&self) -> RecognizerSettings {
        RecognizerSettings {
            locale: self.locale.clone(),
            interim_results: self.interim_results,
            max_alternatives: self.max_alternatives,
        }
    }
}

fn default_locale() -> String {
    "en-US".into()
}

fn default_max_alternatives() -> u32 {
    1
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn deserialize_filter<'de, D>(deserializer: D) -> std::result::Result<Filter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(Filter::parse_lenient(&name))
}

/// Global configuration parsed from `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Whether the store starts with the starter tasks.
    #[serde(default = "default_true")]
    pub seed_samples: bool,
    /// Initial control selections.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Dictation settings.
    #[serde(default)]
    pub dictation: DictationConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            defaults: DefaultsConfig::default(),
            dictation: DictationConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        debug!(path = %path.display(), "config file read");
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let dictation = &self.dictation;

        if dictation.locale.trim().is_empty() {
            return Err(AppError::Config("dictation.locale must not be empty".into()));
        }

        if dictation.max_alternatives == 0 {
            return Err(AppError::Config(
                "dictation.max_alternatives must be greater than zero".into(),
            ));
        }

        if dictation.timeout_seconds == 0 {
            return Err(AppError::Config(
                "dictation.timeout_seconds must be greater than zero".into(),
            ));
        }

        if dictation
            .command
            .as_deref()
            .is_some_and(|command| command.trim().is_empty())
        {
            return Err(AppError::Config(
                "dictation.command must not be blank when set".into(),
            ));
        }

        Ok(())
    }
}
