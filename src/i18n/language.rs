//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code found in the registry, so any
//! `Language` value handed to the translation pipeline is already on the
//! allow-list.

use crate::i18n::registry::{self, LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a language code is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language code: '{0}'")]
pub struct UnknownLanguage(pub String);

/// A validated language.
#[derive(Clone, Copy)]
pub struct Language {
    config: &'static LanguageConfig,
}

impl Language {
    /// English, the fixed source language.
    pub const ENGLISH: Language = Language {
        config: &registry::ENGLISH,
    };

    /// Spanish, the default translation target.
    pub const SPANISH: Language = Language {
        config: &registry::SPANISH,
    };

    /// Resolve a code against the registry.
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::from_code("fr")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, UnknownLanguage> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { config })
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }

    /// The source language every translation starts from.
    pub fn canonical() -> Language {
        Language {
            config: LanguageRegistry::get().canonical(),
        }
    }

    /// Default target language offered before the user picks one.
    pub fn default_target() -> Language {
        Language::SPANISH
    }

    /// All languages that can be selected as a translation target.
    pub fn targets() -> impl Iterator<Item = Language> {
        LanguageRegistry::get()
            .targets()
            .map(|config| Language { config })
    }

    /// ISO 639-1 language code (e.g., "en", "es").
    pub fn code(&self) -> &'static str {
        self.config.code
    }

    /// Full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        self.config
    }

    /// English name of the language (e.g., "English", "Spanish").
    pub fn name(&self) -> &'static str {
        self.config.name
    }

    /// Native name of the language (e.g., "English", "Español").
    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }

    /// BCP 47 locale for speech output (e.g., "es-ES").
    pub fn speech_locale(&self) -> &'static str {
        self.config.speech_locale
    }

    /// Label shown in language pickers, e.g. "Spanish (Español)".
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name(), self.native_name())
    }

    pub fn is_canonical(&self) -> bool {
        self.config.is_canonical
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Language {}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("code", &self.code())
            .finish()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s.trim())
    }
}
