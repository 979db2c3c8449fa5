//! Player settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_bingo::TermCatalog;
use tracing::{debug, info, instrument};

/// User-configurable settings, injected into the app at startup.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct BingoSettings {
    /// Ring the terminal bell on tile marks and wins.
    #[serde(default = "default_sound_enabled")]
    sound_enabled: bool,

    /// Custom 25-term catalog. Falls back to the built-in terms.
    #[serde(default)]
    terms: Option<Vec<String>>,

    /// Seed for a reproducible shuffle.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_sound_enabled() -> bool {
    true
}

impl Default for BingoSettings {
    fn default() -> Self {
        Self {
            sound_enabled: default_sound_enabled(),
            terms: None,
            seed: None,
        }
    }
}

impl BingoSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            sound_enabled = settings.sound_enabled,
            custom_terms = settings.terms.is_some(),
            "Settings loaded successfully"
        );
        Ok(settings)
    }

    /// Loads settings from `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No settings file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds the term catalog these settings describe.
    #[instrument(skip(self))]
    pub fn catalog(&self) -> Result<TermCatalog, SettingsError> {
        match &self.terms {
            Some(terms) => TermCatalog::new(terms.iter().cloned())
                .map_err(|e| SettingsError::new(format!("Invalid terms: {}", e))),
            None => Ok(TermCatalog::builtin()),
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
