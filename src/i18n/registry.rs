//! The fixed table of languages the translator knows about.
//!
//! Built at compile time; lookups hand out `'static` borrows into it.

/// One row of the language table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Two-letter code sent to the translation services
    pub code: &'static str,
    pub name: &'static str,
    /// Name as written in the language itself
    pub native_name: &'static str,
    /// BCP 47 tag for text-to-speech, e.g. "es-ES"
    pub speech_locale: &'static str,
    /// Set for the source language only
    pub is_canonical: bool,
}

pub(crate) const ENGLISH: LanguageConfig = LanguageConfig {
    code: "en",
    name: "English",
    native_name: "English",
    speech_locale: "en-US",
    is_canonical: true,
};

pub(crate) const SPANISH: LanguageConfig = LanguageConfig {
    code: "es",
    name: "Spanish",
    native_name: "Español",
    speech_locale: "es-ES",
    is_canonical: false,
};

/// Supported languages. The canonical language must stay at index 0.
static LANGUAGES: [LanguageConfig; 11] = [
    ENGLISH,
    SPANISH,
    LanguageConfig {
        code: "fr",
        name: "French",
        native_name: "Français",
        speech_locale: "fr-FR",
        is_canonical: false,
    },
    LanguageConfig {
        code: "de",
        name: "German",
        native_name: "Deutsch",
        speech_locale: "de-DE",
        is_canonical: false,
    },
    LanguageConfig {
        code: "hi",
        name: "Hindi",
        native_name: "हिन्दी",
        speech_locale: "hi-IN",
        is_canonical: false,
    },
    LanguageConfig {
        code: "zh",
        name: "Chinese",
        native_name: "中文",
        speech_locale: "zh-CN",
        is_canonical: false,
    },
    LanguageConfig {
        code: "ar",
        name: "Arabic",
        native_name: "العربية",
        speech_locale: "ar-SA",
        is_canonical: false,
    },
    LanguageConfig {
        code: "ru",
        name: "Russian",
        native_name: "Русский",
        speech_locale: "ru-RU",
        is_canonical: false,
    },
    LanguageConfig {
        code: "ja",
        name: "Japanese",
        native_name: "日本語",
        speech_locale: "ja-JP",
        is_canonical: false,
    },
    LanguageConfig {
        code: "pt",
        name: "Portuguese",
        native_name: "Português",
        speech_locale: "pt-BR",
        is_canonical: false,
    },
    LanguageConfig {
        code: "it",
        name: "Italian",
        native_name: "Italiano",
        speech_locale: "it-IT",
        is_canonical: false,
    },
];

/// Read-only view over the language table.
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: &LANGUAGES,
};

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Look up a row by exact (case-sensitive) code.
    pub fn get_by_code(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|row| row.code == code)
    }

    /// Every row, source language first.
    pub fn list_all(&self) -> &'static [LanguageConfig] {
        self.languages
    }

    /// Rows offered as translation targets (everything but the source).
    pub fn targets(&self) -> impl Iterator<Item = &'static LanguageConfig> {
        self.languages.iter().filter(|lang| !lang.is_canonical)
    }

    pub fn canonical(&self) -> &'static LanguageConfig {
        &self.languages[0]
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}
