//! Error definitions for the relay client.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Errors that can occur while talking to the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Base URL given at construction could not be parsed.
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// A fetch needed the discovery document but none is loaded.
    #[error("relay configuration unavailable")]
    ConfigUnavailable,

    /// Fetching or parsing the discovery document failed.
    #[error("discovery fetch failed: {0}")]
    Config(#[source] reqwest::Error),

    /// The discovery document parsed but cannot drive the protocol.
    #[error("discovery document invalid: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Wire fetch failure, passed through from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The encoded status line carried by the relay could not be decoded.
    #[error("malformed status line {value:?}")]
    MalformedStatus { value: String },

    /// A header name built at runtime was rejected by the HTTP layer.
    #[error("invalid header name: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),

    /// A header value built at runtime was rejected by the HTTP layer.
    #[error("invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),
}

/// Result type for relay client operations.
pub type RelayResult<T> = Result<T, RelayError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
