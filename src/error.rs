//! Classified failures produced by translation providers.

use serde::Serialize;
use thiserror::Error;

/// Broad classification of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request could not be sent or the response body could not be read
    Network,
    /// The body is not JSON or does not have the provider's expected shape
    Parse,
    /// The service answered with a non-2xx status
    Service,
}

/// A failed call to a translation provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("{provider} request failed: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} API error ({status}): {body}")]
    Service {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} returned an unexpected response: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },
}

impl TranslateError {
    pub fn network(provider: &'static str, error: reqwest::Error) -> Self {
        Self::Network {
            provider,
            message: error.to_string(),
        }
    }

    pub fn parse(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Service { .. } => ErrorKind::Service,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// Name of the provider that produced the error.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Network { provider, .. }
            | Self::Service { provider, .. }
            | Self::Parse { provider, .. } => provider,
        }
    }
}
