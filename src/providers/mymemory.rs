use super::{read_json, TranslationProvider};
use crate::error::TranslateError;
use crate::i18n::Language;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;

/// Free MyMemory translation endpoint
pub const MYMEMORY_API_URL: &str = "https://api.mymemory.translated.net/get";

const NAME: &str = "mymemory";

/// MyMemory translation memory service.
#[derive(Debug, Clone)]
pub struct MyMemoryProvider {
    url: String,
}

impl MyMemoryProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for MyMemoryProvider {
    fn default() -> Self {
        Self::new(MYMEMORY_API_URL)
    }
}

impl TranslationProvider for MyMemoryProvider {
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
            let langpair = format!("{}|{}", source.code(), target.code());
            let response = client
                .get(&self.url)
                .query(&[("q", text), ("langpair", langpair.as_str())])
                .send()
                .await
                .map_err(|e| TranslateError::network(NAME, e))?;

            let body = read_json(NAME, response).await?;
            parse_response(&body)
        }
        .boxed()
    }
}

/// `responseStatus` arrives as a number on success and sometimes as a string on errors.
fn status_is_ok(body: &Value) -> bool {
    match body.get("responseStatus") {
        Some(Value::Number(n)) => n.as_u64() == Some(200),
        Some(Value::String(s)) => s.trim() == "200",
        _ => false,
    }
}

fn parse_response(body: &Value) -> Result<String, TranslateError> {
    if status_is_ok(body) {
        let translated = body
            .pointer("/responseData/translatedText")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty());
        if let Some(text) = translated {
            return Ok(text.to_string());
        }
    }

    // Fall back to the best translation memory match
    body.get("matches")
        .and_then(Value::as_array)
        .and_then(|matches| matches.first())
        .and_then(|first| first.get("translation"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| TranslateError::parse(NAME, "No translation received from API"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_parse_response_data() {
        let body = json!({
            "responseStatus": 200,
            "responseData": {"translatedText": "Bonjour", "match": 1}
        });
        assert_eq!(parse_response(&body).unwrap(), "Bonjour");
    }

    #[test]
    fn test_parse_accepts_string_status() {
        let body = json!({
            "responseStatus": "200",
            "responseData": {"translatedText": "Hallo"}
        });
        assert_eq!(parse_response(&body).unwrap(), "Hallo");
    }

    #[test]
    fn test_parse_uses_first_match_when_status_not_ok() {
        let body = json!({
            "responseStatus": 403,
            "responseData": {"translatedText": "INVALID LANGUAGE PAIR"},
            "matches": [
                {"translation": "Ciao", "quality": 74},
                {"translation": "Salve", "quality": 70}
            ]
        });
        assert_eq!(parse_response(&body).unwrap(), "Ciao");
    }

    #[test]
    fn test_parse_uses_first_match_when_translated_text_empty() {
        let body = json!({
            "responseStatus": 200,
            "responseData": {"translatedText": ""},
            "matches": [{"translation": "Olá"}]
        });
        assert_eq!(parse_response(&body).unwrap(), "Olá");
    }

    #[test]
    fn test_parse_without_text_or_matches_is_parse_error() {
        let body = json!({"responseStatus": 200, "responseData": {}, "matches": []});
        let error = parse_response(&body).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Parse);
        assert!(error.to_string().contains("No translation received"));
    }

    #[test]
    fn test_parse_match_without_translation_field_is_parse_error() {
        let body = json!({"responseStatus": 500, "matches": [{"segment": "Hello"}]});
        assert_eq!(parse_response(&body).unwrap_err().kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_translate_sends_langpair() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get"))
            .and(query_param("q", "Hello world"))
            .and(query_param("langpair", "en|fr"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "responseStatus": 200,
                "responseData": {"translatedText": "Bonjour le monde"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = MyMemoryProvider::new(format!("{}/get", mock_server.uri()));
        let client = reqwest::Client::new();
        let french = Language::from_code("fr").unwrap();

        let result = provider
            .translate(&client, "Hello world", Language::ENGLISH, french)
            .await
            .expect("Should succeed");

        assert_eq!(result, "Bonjour le monde");
    }

    #[tokio::test]
    async fn test_translate_server_error_is_service_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/get"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let provider = MyMemoryProvider::new(format!("{}/get", mock_server.uri()));
        let client = reqwest::Client::new();

        let error = provider
            .translate(&client, "Hello", Language::ENGLISH, Language::SPANISH)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Service);
        assert!(error.to_string().contains("upstream down"));
    }
}
