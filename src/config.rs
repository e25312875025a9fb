use crate::i18n::Language;
use crate::preferences::Preferences;
use crate::providers::{GOOGLE_TRANSLATE_URL, MYMEMORY_API_URL, RAPIDAPI_HOST, RAPIDAPI_URL};
use anyhow::{bail, Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which providers the translator calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Free Google endpoint first, RapidAPI when it fails and a key is set
    #[default]
    Fallback,
    /// Free Google endpoint only
    Google,
    /// MyMemory only
    MyMemory,
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fallback" => Ok(Self::Fallback),
            "google" => Ok(Self::Google),
            "mymemory" => Ok(Self::MyMemory),
            other => bail!(
                "Unknown translator strategy '{}' (expected fallback, google or mymemory)",
                other
            ),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fallback => "fallback",
            Self::Google => "google",
            Self::MyMemory => "mymemory",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Provider selection
    pub strategy: Strategy,

    // Endpoints
    pub google_api_url: String,
    pub mymemory_api_url: String,
    pub rapidapi_url: String,
    pub rapidapi_host: String,

    // Credentials
    pub rapidapi_key: Option<String>,

    // Preferences
    pub preferences_file: PathBuf,
    pub default_target: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            google_api_url: GOOGLE_TRANSLATE_URL.to_string(),
            mymemory_api_url: MYMEMORY_API_URL.to_string(),
            rapidapi_url: RAPIDAPI_URL.to_string(),
            rapidapi_host: RAPIDAPI_HOST.to_string(),
            rapidapi_key: None,
            preferences_file: default_preferences_file(),
            default_target: Language::default_target(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            strategy: match std::env::var("TRANSLATOR_STRATEGY") {
                Ok(value) => value.parse().context("Invalid TRANSLATOR_STRATEGY")?,
                Err(_) => defaults.strategy,
            },

            google_api_url: std::env::var("GOOGLE_TRANSLATE_URL")
                .unwrap_or(defaults.google_api_url),
            mymemory_api_url: std::env::var("MYMEMORY_API_URL")
                .unwrap_or(defaults.mymemory_api_url),
            rapidapi_url: std::env::var("RAPIDAPI_URL").unwrap_or(defaults.rapidapi_url),
            rapidapi_host: std::env::var("RAPIDAPI_HOST").unwrap_or(defaults.rapidapi_host),

            rapidapi_key: std::env::var("RAPIDAPI_KEY")
                .ok()
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),

            preferences_file: std::env::var("PREFERENCES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_file),
            default_target: match std::env::var("DEFAULT_TARGET_LANGUAGE") {
                Ok(code) => code.parse().context("Invalid DEFAULT_TARGET_LANGUAGE")?,
                Err(_) => defaults.default_target,
            },
        })
    }

    /// Fill settings the environment left unset from saved preferences.
    ///
    /// An explicit `RAPIDAPI_KEY` wins over a stored key.
    pub fn with_preferences(mut self, preferences: &Preferences) -> Self {
        if self.rapidapi_key.is_none() {
            self.rapidapi_key = preferences.api_key.clone();
        }
        self
    }
}

fn default_preferences_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("anylang").join("preferences.json"))
        .unwrap_or_else(|| PathBuf::from(".anylang-preferences.json"))
}
