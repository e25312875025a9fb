//! Translation result validation.
//!
//! Validation never changes the outcome of a translation. It only reports
//! suspicious results (empty output, untranslated output, dropped URLs) so
//! they show up in the logs.

use regex::Regex;
use std::sync::OnceLock;

/// Warnings about a single translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean
    pub fn is_clean(&self) -> bool {
        !self.has_warnings()
    }
}

/// Post-translation sanity checks.
pub struct TranslationValidator;

static LINK_PATTERN: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Compare a translated string with its source text.
    ///
    /// Flags an empty translation, one that only echoes the input, and any
    /// link from the input that is missing from the output.
    pub fn validate(original: &str, translated: &str) -> ValidationReport {
        let mut report = ValidationReport::new();
        let translated = translated.trim();

        if translated.is_empty() {
            report.warnings.push("Translation is empty".to_string());
            return report;
        }

        if translated.to_lowercase() == original.trim().to_lowercase() {
            report
                .warnings
                .push("Translation is identical to the original text".to_string());
        }

        let kept = Self::links(translated);
        let dropped: Vec<&str> = Self::links(original)
            .into_iter()
            .filter(|link| !kept.contains(link))
            .collect();
        if !dropped.is_empty() {
            report
                .warnings
                .push(format!("Links lost in translation: {}", dropped.join(", ")));
        }

        report
    }

    fn links(text: &str) -> Vec<&str> {
        LINK_PATTERN
            .get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("link pattern is valid"))
            .find_iter(text)
            .map(|found| found.as_str())
            .collect()
    }
}
