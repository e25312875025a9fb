//! User preferences persisted between runs.
//!
//! Preferences are loaded once at startup, changed only by explicit user
//! actions, and written back immediately after each change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Saved user settings. Missing fields fall back to their defaults.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,

    /// RapidAPI key for the authenticated fallback provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Preferences {
    /// Store a trimmed API key. A blank key clears the stored one.
    ///
    /// Returns `true` if a key is stored afterwards.
    pub fn set_api_key(&mut self, key: &str) -> bool {
        let key = key.trim();
        self.api_key = if key.is_empty() {
            None
        } else {
            Some(key.to_string())
        };
        self.api_key.is_some()
    }

    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }

    /// The API key with everything past a short prefix hidden, for display.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let prefix: String = key.chars().take(4).collect();
            format!("{}****", prefix)
        })
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("theme", &self.theme)
            .field("api_key", &self.masked_api_key())
            .finish()
    }
}

/// JSON file holding the user's preferences.
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, returning defaults when the file does not exist yet.
    pub fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            debug!("No preferences file at {}, using defaults", self.path.display());
            return Ok(Preferences::default());
        }

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences from {}", self.path.display()))?;

        if contents.trim().is_empty() {
            return Ok(Preferences::default());
        }

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences in {}", self.path.display()))
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(preferences)
            .context("Failed to serialize preferences")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))?;

        debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }

    /// Load, apply `change`, and persist in one step.
    pub fn update<F>(&self, change: F) -> Result<Preferences>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut preferences = self.load()?;
        change(&mut preferences);
        self.save(&preferences)?;
        Ok(preferences)
    }
}
