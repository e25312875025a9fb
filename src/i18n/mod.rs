//! Language table and the validated `Language` type.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//!
//! # Example
//!
//! ```rust,ignore
//! use anylang_translator::i18n::{Language, LanguageRegistry};
//!
//! // Source language (English)
//! let canonical = Language::canonical();
//!
//! // Create language from code
//! let french = Language::from_code("fr")?;
//!
//! // List every selectable target
//! let targets: Vec<_> = LanguageRegistry::get().targets().collect();
//! ```

mod language;
mod registry;

pub use language::{Language, UnknownLanguage};
pub use registry::{LanguageConfig, LanguageRegistry};
