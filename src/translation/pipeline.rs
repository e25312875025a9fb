use super::{TranslationMetrics, TranslationResult, TranslationValidator};
use crate::config::{Config, Strategy};
use crate::error::TranslateError;
use crate::i18n::Language;
use crate::providers::{GoogleFreeProvider, MyMemoryProvider, RapidApiProvider, TranslationProvider};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Text used by `check_connection`
const CONNECTION_TEST_TEXT: &str = "Hello";

/// Translates English text through a primary provider and an optional fallback.
///
/// At most one network translation runs per `Translator` at a time; a call
/// made while another is in flight returns [`TranslationResult::Busy`].
pub struct Translator {
    client: reqwest::Client,
    source: Language,
    primary: Box<dyn TranslationProvider>,
    fallback: Option<Box<dyn TranslationProvider>>,
    in_flight: AtomicBool,
    metrics: TranslationMetrics,
}

/// Holds the in-flight flag and clears it when dropped, including when the
/// owning future is cancelled.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Translator {
    /// Create a translator that calls a single provider.
    pub fn new(client: reqwest::Client, primary: Box<dyn TranslationProvider>) -> Self {
        Self {
            client,
            source: Language::canonical(),
            primary,
            fallback: None,
            in_flight: AtomicBool::new(false),
            metrics: TranslationMetrics::new(),
        }
    }

    /// Add a provider to try when the primary fails.
    ///
    /// The fallback is only called if it reports itself configured.
    pub fn with_fallback(mut self, fallback: Box<dyn TranslationProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Build the provider chain selected by `config.strategy`.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        match config.strategy {
            Strategy::Fallback => Self::new(
                client,
                Box::new(GoogleFreeProvider::new(&config.google_api_url)),
            )
            .with_fallback(Box::new(RapidApiProvider::new(
                &config.rapidapi_url,
                &config.rapidapi_host,
                config.rapidapi_key.clone(),
            ))),
            Strategy::Google => Self::new(
                client,
                Box::new(GoogleFreeProvider::new(&config.google_api_url)),
            ),
            Strategy::MyMemory => Self::new(
                client,
                Box::new(MyMemoryProvider::new(&config.mymemory_api_url)),
            ),
        }
    }

    pub fn source_language(&self) -> Language {
        self.source
    }

    pub fn primary_provider(&self) -> &'static str {
        self.primary.name()
    }

    /// Name of the fallback provider, if one is set and usable.
    pub fn active_fallback(&self) -> Option<&'static str> {
        self.usable_fallback().map(|provider| provider.name())
    }

    /// Whether a translation is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Translate `text` into `target`.
    ///
    /// Input is trimmed. Empty input and an English target are answered
    /// without any network call. Otherwise the primary provider is tried,
    /// then the fallback (if configured). When both fail, the primary's error
    /// is returned.
    pub async fn translate(&self, text: &str, target: Language) -> TranslationResult {
        self.metrics.record_request();

        let text = text.trim();
        if text.is_empty() {
            debug!("Empty input, nothing to translate");
            self.metrics.record_short_circuit();
            return TranslationResult::Empty;
        }

        if target == self.source {
            debug!("Target is the source language ({}), returning input", target.code());
            self.metrics.record_short_circuit();
            return TranslationResult::Unchanged {
                text: text.to_string(),
            };
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("Translation already in progress, rejecting new request");
            self.metrics.record_busy_rejection();
            return TranslationResult::Busy;
        };

        info!(
            "Translating {} chars from {} to {} ({})",
            text.chars().count(),
            self.source.code(),
            target.code(),
            target.name()
        );

        let primary_error = match self.call_provider(self.primary.as_ref(), text, target).await {
            Ok(translated) => return self.succeed(text, translated, self.primary.name(), target),
            Err(e) => e,
        };

        let Some(fallback) = self.usable_fallback() else {
            return self.fail(primary_error);
        };

        info!(
            "{} failed, trying {}",
            self.primary.name(),
            fallback.name()
        );
        self.metrics.record_fallback_attempt();

        match self.call_provider(fallback, text, target).await {
            Ok(translated) => self.succeed(text, translated, fallback.name(), target),
            Err(fallback_error) => {
                warn!("Fallback {} also failed: {}", fallback.name(), fallback_error);
                self.fail(primary_error)
            }
        }
    }

    /// Translate a short fixed phrase to Spanish through the primary provider.
    ///
    /// Used to confirm the primary endpoint is reachable.
    pub async fn check_connection(&self) -> Result<String, TranslateError> {
        self.call_provider(self.primary.as_ref(), CONNECTION_TEST_TEXT, Language::SPANISH)
            .await
    }

    fn usable_fallback(&self) -> Option<&dyn TranslationProvider> {
        self.fallback
            .as_deref()
            .filter(|provider| provider.is_configured())
    }

    async fn call_provider(
        &self,
        provider: &dyn TranslationProvider,
        text: &str,
        target: Language,
    ) -> Result<String, TranslateError> {
        debug!("Calling {} provider", provider.name());
        self.metrics.record_provider_call();

        let result = provider
            .translate(&self.client, text, self.source, target)
            .await;

        if let Err(e) = &result {
            warn!("{} translation failed: {}", provider.name(), e);
            self.metrics.record_provider_failure();
        }
        result
    }

    fn succeed(
        &self,
        original: &str,
        translated: String,
        provider: &'static str,
        target: Language,
    ) -> TranslationResult {
        let validation = TranslationValidator::validate(original, &translated);
        if validation.has_warnings() {
            warn!(
                "Translation validation warnings for {} ({}): {:?}",
                target.name(),
                target.code(),
                validation.warnings
            );
        }

        info!("Translation complete via {}", provider);
        self.metrics.record_success();
        TranslationResult::Success {
            translated_text: translated,
            provider,
        }
    }

    fn fail(&self, error: TranslateError) -> TranslationResult {
        warn!("Translation failed: {}", error);
        self.metrics.record_failure();
        TranslationResult::Failure { error }
    }
}
