use super::{read_json, TranslationProvider};
use crate::error::TranslateError;
use crate::i18n::Language;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

/// Free, unauthenticated Google Translate endpoint
pub const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

const NAME: &str = "google";

/// Google Translate's free `gtx` client endpoint.
#[derive(Debug, Clone)]
pub struct GoogleFreeProvider {
    url: String,
}

impl GoogleFreeProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for GoogleFreeProvider {
    fn default() -> Self {
        Self::new(GOOGLE_TRANSLATE_URL)
    }
}

impl TranslationProvider for GoogleFreeProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn translate<'a>(
        &'a self,
        client: &'a reqwest::Client,
        text: &'a str,
        source: Language,
        target: Language,
    ) -> BoxFuture<'a, Result<String, TranslateError>> {
        async move {
            let response = client
                .get(&self.url)
                .query(&[
                    ("client", "gtx"),
                    ("sl", source.code()),
                    ("tl", target.code()),
                    ("dt", "t"),
                    ("q", text),
                ])
                .send()
                .await
                .map_err(|e| TranslateError::network(NAME, e))?;

            let body = read_json(NAME, response).await?;
            parse_response(&body)
        }
        .boxed()
    }
}

/// Join the translated segments of a `[[[translated, original, ...], ...], ...]` body.
///
/// Segments whose first element is not a string contribute nothing.
fn parse_response(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::parse(NAME, "Unexpected API response format"))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}
