use super::{read_json, TranslationProvider};
use crate::error::TranslateError;
use crate::i18n::Language;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

/// Google Translate v2 proxied through RapidAPI
pub const RAPIDAPI_URL: &str = "https://google-translate1.p.rapidapi.com/language/translate/v2";

/// Value of the `X-RapidAPI-Host` header
pub const RAPIDAPI_HOST: &str = "google-translate1.p.rapidapi.com";

const NAME: &str = "rapidapi";

/// Key-authenticated Google Translate through RapidAPI.
#[derive(Clone)]
pub struct RapidApiProvider {
    url: String,
    host: String,
    api_key: Option<String>,
}

impl RapidApiProvider {
    pub fn new(url: impl Into<String>, host: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            url: url.into(),
            host: host.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }
}

// The key stays out of debug output
impl std::fmt::Debug for RapidApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiProvider")
            .field("url", &self.url)
            .field("host", &self.host)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl TranslationProvider for RapidApiProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn translate<'a>(
        &'a self,
        client: &'a reqwest::Client,
        text: &'a str,
        source: Language,
        target: Language,
    ) -> BoxFuture<'a, Result<String, TranslateError>> {
        async move {
            let api_key = self
                .api_key
                .as_deref()
                .ok_or_else(|| TranslateError::Network {
                    provider: NAME,
                    message: "no RapidAPI key configured".to_string(),
                })?;

            let response = client
                .post(&self.url)
                .header("Accept-Encoding", "application/gzip")
                .header("X-RapidAPI-Key", api_key)
                .header("X-RapidAPI-Host", &self.host)
                .form(&[
                    ("q", text),
                    ("target", target.code()),
                    ("source", source.code()),
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

fn parse_response(body: &Value) -> Result<String, TranslateError> {
    body.pointer("/data/translations/0/translatedText")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            TranslateError::parse(NAME, "Invalid response from RapidAPI Google Translate")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use wiremock::{
        matchers::{body_string_contains, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn provider_for(server: &MockServer, key: Option<&str>) -> RapidApiProvider {
        RapidApiProvider::new(
            format!("{}/language/translate/v2", server.uri()),
            RAPIDAPI_HOST,
            key.map(str::to_string),
        )
    }

    #[test]
    fn test_parse_translations() {
        let body = json!({"data": {"translations": [{"translatedText": "Hola mundo"}]}});
        assert_eq!(parse_response(&body).unwrap(), "Hola mundo");
    }

    #[test]
    fn test_parse_missing_path_is_parse_error() {
        for body in [
            json!({}),
            json!({"data": {}}),
            json!({"data": {"translations": []}}),
            json!({"data": {"translations": [{"detectedSourceLanguage": "en"}]}}),
        ] {
            assert_eq!(
                parse_response(&body).unwrap_err().kind(),
                ErrorKind::Parse,
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_is_configured_requires_non_blank_key() {
        assert!(!RapidApiProvider::new(RAPIDAPI_URL, RAPIDAPI_HOST, None).is_configured());
        assert!(
            !RapidApiProvider::new(RAPIDAPI_URL, RAPIDAPI_HOST, Some("   ".to_string()))
                .is_configured()
        );
        assert!(
            RapidApiProvider::new(RAPIDAPI_URL, RAPIDAPI_HOST, Some("key".to_string()))
                .is_configured()
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let provider =
            RapidApiProvider::new(RAPIDAPI_URL, RAPIDAPI_HOST, Some("super-secret".to_string()));
        let debug = format!("{:?}", provider);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("has_api_key: true"));
    }

    #[tokio::test]
    async fn test_translate_posts_form_with_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/language/translate/v2"))
            .and(header("X-RapidAPI-Key", "test-rapid-key"))
            .and(header("X-RapidAPI-Host", RAPIDAPI_HOST))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("q=Good+night"))
            .and(body_string_contains("target=de"))
            .and(body_string_contains("source=en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"translations": [{"translatedText": "Gute Nacht"}]}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server, Some("test-rapid-key"));
        let client = reqwest::Client::new();
        let german = Language::from_code("de").unwrap();

        let result = provider
            .translate(&client, "Good night", Language::ENGLISH, german)
            .await
            .expect("Should succeed");

        assert_eq!(result, "Gute Nacht");
    }

    #[tokio::test]
    async fn test_translate_captures_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/language/translate/v2"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string(r#"{"message":"You are not subscribed to this API."}"#),
            )
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server, Some("bad-key"));
        let client = reqwest::Client::new();

        let error = provider
            .translate(&client, "Hello", Language::ENGLISH, Language::SPANISH)
            .await
            .unwrap_err();

        match error {
            TranslateError::Service {
                provider,
                status,
                body,
            } => {
                assert_eq!(provider, "rapidapi");
                assert_eq!(status, 403);
                assert!(body.contains("not subscribed"));
            }
            other => panic!("Expected service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_without_key_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server, None);
        let client = reqwest::Client::new();

        let result = provider
            .translate(&client, "Hello", Language::ENGLISH, Language::SPANISH)
            .await;

        assert!(result.is_err());
    }
}
