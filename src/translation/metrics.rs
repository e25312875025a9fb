//! Translation metrics and observability.
//!
//! Each `Translator` owns one `TranslationMetrics`; counters are atomic so a
//! translator shared across tasks can record without locking.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one translator instance.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of `translate` calls
    requests: AtomicUsize,

    /// Calls answered without a network request (empty input or same language)
    short_circuits: AtomicUsize,

    /// Calls rejected because another translation was in flight
    busy_rejections: AtomicUsize,

    /// Number of HTTP calls made to any provider
    provider_calls: AtomicUsize,

    /// Number of provider calls that failed
    provider_failures: AtomicUsize,

    /// Number of times the fallback provider was tried
    fallback_attempts: AtomicUsize,

    /// Calls that ended in a successful translation
    successes: AtomicUsize,

    /// Calls that ended in a failure
    failures: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_short_circuit(&self) {
        self.short_circuits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_busy_rejection(&self) {
        self.busy_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_provider_call(&self) {
        self.provider_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_provider_failure(&self) {
        self.provider_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_attempt(&self) {
        self.fallback_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn provider_calls(&self) -> usize {
        self.provider_calls.load(Ordering::Relaxed)
    }

    pub fn fallback_attempts(&self) -> usize {
        self.fallback_attempts.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let calls = self.provider_calls();
        let provider_failures = self.provider_failures.load(Ordering::Relaxed);
        let provider_success_rate = if calls > 0 {
            (calls.saturating_sub(provider_failures) as f64 / calls as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            requests: self.requests.load(Ordering::Relaxed),
            short_circuits: self.short_circuits.load(Ordering::Relaxed),
            busy_rejections: self.busy_rejections.load(Ordering::Relaxed),
            provider_calls: calls,
            provider_failures,
            fallback_attempts: self.fallback_attempts(),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            provider_success_rate,
        }
    }
}

/// Snapshot of a translator's counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub requests: usize,
    pub short_circuits: usize,
    pub busy_rejections: usize,
    pub provider_calls: usize,
    pub provider_failures: usize,
    pub fallback_attempts: usize,
    pub successes: usize,
    pub failures: usize,

    /// Provider call success rate as a percentage (0-100)
    pub provider_success_rate: f64,
}
