//! The translation pipeline: input checks, provider chain, and outcome classification.

mod metrics;
mod pipeline;
mod validator;

pub use metrics::{MetricsReport, TranslationMetrics};
pub use pipeline::Translator;
pub use validator::{TranslationValidator, ValidationReport};

use crate::error::TranslateError;

/// Outcome of a single `Translator::translate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// A provider returned a translation
    Success {
        translated_text: String,
        provider: &'static str,
    },

    /// The target is the source language; the trimmed input is returned as-is
    Unchanged { text: String },

    /// The input was empty after trimming
    Empty,

    /// Every attempted provider failed; carries the primary provider's error
    Failure { error: TranslateError },

    /// Another translation was already in flight on this translator
    Busy,
}

impl TranslationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Text to show in the output area, if the outcome has any.
    pub fn output_text(&self) -> Option<&str> {
        match self {
            Self::Success {
                translated_text, ..
            } => Some(translated_text),
            Self::Unchanged { text } => Some(text),
            Self::Empty | Self::Failure { .. } | Self::Busy => None,
        }
    }
}
