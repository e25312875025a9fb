//! Translation service adapters.
//!
//! Each provider knows one service's request format and response shape and
//! normalizes it to a plain translated string. The pipeline composes them
//! without knowing which JSON shape sits behind each one.

mod google;
mod mymemory;
mod rapidapi;

pub use google::{GoogleFreeProvider, GOOGLE_TRANSLATE_URL};
pub use mymemory::{MyMemoryProvider, MYMEMORY_API_URL};
pub use rapidapi::{RapidApiProvider, RAPIDAPI_HOST, RAPIDAPI_URL};

use crate::error::TranslateError;
use crate::i18n::Language;
use futures::future::BoxFuture;
use tracing::debug;

/// A translation service reachable over HTTP.
pub trait TranslationProvider: Send + Sync {
    /// Short identifier used in logs and results (e.g., "google")
    fn name(&self) -> &'static str;

    /// Whether the provider has everything it needs to be called.
    ///
    /// Providers that need a credential return `false` until one is set.
    fn is_configured(&self) -> bool {
        true
    }

    /// Translate `text` from `source` to `target`.
    fn translate<'a>(
        &'a self,
        client: &'a reqwest::Client,
        text: &'a str,
        source: Language,
        target: Language,
    ) -> BoxFuture<'a, Result<String, TranslateError>>;
}

/// Turn an HTTP response into JSON, classifying failures.
///
/// Non-2xx responses keep the body text for diagnostics.
async fn read_json(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<serde_json::Value, TranslateError> {
    let status = response.status();
    debug!("{} response status: {}", provider, status);

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        return Err(TranslateError::Service {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| TranslateError::network(provider, e))?;

    serde_json::from_str(&body)
        .map_err(|e| TranslateError::parse(provider, format!("invalid JSON body: {}", e)))
}
