//! Runtime configuration for the terminal front end.

use flashcard_core::{MatchingMode, PracticeOptions};
use std::path::PathBuf;
use thiserror::Error;

pub const DATA_FILE_VAR: &str = "FLASHCARDS_DATA_FILE";
pub const MATCHING_MODE_VAR: &str = "FLASHCARDS_MATCHING_MODE";
pub const FUZZY_THRESHOLD_VAR: &str = "FLASHCARDS_FUZZY_THRESHOLD";

const DATA_FILE_NAME: &str = "Flashcards.data";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown matching mode {0:?} (expected exact, case_insensitive or fuzzy)")]
    InvalidMatchingMode(String),

    #[error("fuzzy threshold must be a number between 0 and 1, got {0:?}")]
    InvalidThreshold(String),
}

/// Values given on the command line. They win over the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub data_file: Option<PathBuf>,
    pub matching_mode: Option<MatchingMode>,
}

/// Resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub practice: PracticeOptions,
}

impl Settings {
    /// Resolve settings from overrides and the process environment.
    pub fn from_env(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve settings using `lookup` for environment values.
    pub fn resolve<F>(overrides: &Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = overrides
            .data_file
            .clone()
            .or_else(|| lookup(DATA_FILE_VAR).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(default_data_file);

        let matching_mode = match overrides.matching_mode {
            Some(mode) => mode,
            None => match lookup(MATCHING_MODE_VAR) {
                Some(raw) => MatchingMode::from_str(raw.trim())
                    .ok_or(ConfigError::InvalidMatchingMode(raw))?,
                None => MatchingMode::default(),
            },
        };

        let fuzzy_threshold = match lookup(FUZZY_THRESHOLD_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|t| (0.0..=1.0).contains(t))
                .ok_or(ConfigError::InvalidThreshold(raw))?,
            None => PracticeOptions::default().fuzzy_threshold,
        };

        Ok(Self {
            data_file,
            practice: PracticeOptions {
                matching_mode,
                fuzzy_threshold,
            },
        })
    }
}

/// Default location of the data file.
pub fn default_data_file() -> PathBuf {
    // Use the local data directory when there is one, fallback to current dir
    match dirs::data_local_dir() {
        Some(dir) => dir.join("flashcards").join(DATA_FILE_NAME),
        None => PathBuf::from(DATA_FILE_NAME),
    }
}
