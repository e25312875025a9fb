//! User-facing status text for translation outcomes.

use crate::error::ErrorKind;
use crate::translation::TranslationResult;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// Status line plus a one-off notification for a finished translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub status: &'static str,
    pub severity: Severity,
    pub notice: &'static str,
}

impl StatusMessage {
    pub const READY: &'static str = "Ready to translate";

    pub fn for_result(result: &TranslationResult) -> Self {
        match result {
            TranslationResult::Success { .. } => Self {
                status: "Translation complete",
                severity: Severity::Success,
                notice: "Translation completed successfully!",
            },
            TranslationResult::Unchanged { .. } => Self {
                status: "Same language selected",
                severity: Severity::Info,
                notice: "English selected as target; text left unchanged.",
            },
            TranslationResult::Empty => Self {
                status: Self::READY,
                severity: Severity::Info,
                notice: "Please enter text to translate.",
            },
            TranslationResult::Busy => Self {
                status: "Translation already in progress",
                severity: Severity::Warning,
                notice: "Please wait for the current translation to finish.",
            },
            TranslationResult::Failure { error } => {
                let notice = match error.kind() {
                    ErrorKind::Network | ErrorKind::Service => {
                        "Network error. Please check your internet connection."
                    }
                    ErrorKind::Parse => {
                        "Translation service temporarily unavailable. Please try again."
                    }
                };
                Self {
                    status: "Translation failed",
                    severity: Severity::Error,
                    notice,
                }
            }
        }
    }
}
