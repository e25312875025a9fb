//! English-to-many text translation over public translation APIs.
//!
//! The core is [`translation::Translator`]: it validates input, calls a
//! primary provider, falls back to an authenticated provider when one is
//! configured, and classifies the outcome as a [`translation::TranslationResult`].

pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod input;
pub mod preferences;
pub mod providers;
pub mod status;
pub mod translation;
