//! Relay client: construction, discovery, and the fetch operation.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use reqwest::header::HeaderMap;
use reqwest::{Body, Method};
use tracing::debug;
use url::Url;

use crate::config::loader;
use crate::config::schema::RelayConfig;
use crate::error::{RelayError, RelayResult};
use crate::protocol::decode::decode_response_head;
use crate::protocol::encode::{encode_request_headers, Credentials};
use crate::response::RelayResponse;

/// Options for a single fetch, mirroring a fetch-style `init` bag.
///
/// Method defaults to `GET`; headers and body default to empty.
#[derive(Debug, Default)]
pub struct FetchOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Body>,
}

/// Client for an origin reachable only through a header-multiplexing
/// relay.
///
/// Holds the relay's base URL, optional credentials for the relay hop,
/// and the discovery document once loaded. The document slot is shared
/// across concurrent calls without single-flight coalescing: racing
/// first-use fetches may each load the document, and the last completed
/// load wins. That race is deliberate; the loads are idempotent.
#[derive(Debug)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
    config: ArcSwapOption<RelayConfig>,
}

impl RelayClient {
    /// Create a client for the relay at `base_url`.
    pub fn new(base_url: &str) -> RelayResult<Self> {
        Self::build(base_url, None, reqwest::Client::new())
    }

    /// Create a client that authenticates against the relay hop with
    /// HTTP Basic credentials.
    pub fn with_credentials(
        base_url: &str,
        username: &str,
        password: Option<&str>,
    ) -> RelayResult<Self> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.map(str::to_string),
        };
        Self::build(base_url, Some(credentials), reqwest::Client::new())
    }

    /// Create a client on a caller-supplied transport client.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> RelayResult<Self> {
        Self::build(base_url, None, http)
    }

    fn build(
        base_url: &str,
        credentials: Option<Credentials>,
        http: reqwest::Client,
    ) -> RelayResult<Self> {
        Url::parse(base_url)?;
        // one trailing slash stripped so wire targets join cleanly
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url).to_string();

        Ok(Self {
            http,
            base_url,
            credentials,
            config: ArcSwapOption::empty(),
        })
    }

    /// The relay base URL, trailing slash stripped.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The loaded discovery document, if any.
    pub fn config(&self) -> Option<Arc<RelayConfig>> {
        self.config.load_full()
    }

    /// Fetch the relay's discovery document and store it.
    ///
    /// Reloads unconditionally, even when a document is already present.
    /// On failure the slot keeps its previous contents (unset on first
    /// use), so a later call can retry.
    pub async fn load_config(&self) -> RelayResult<()> {
        let config = loader::load_config(&self.http, &self.base_url).await?;
        self.config.store(Some(Arc::new(config)));
        Ok(())
    }

    /// Fetch-style operation against the origin, through the relay.
    ///
    /// The wire target is `<base_url>/<target>` by plain concatenation;
    /// the caller's target is not escaped or validated here. Method and
    /// body pass through to the wire request unchanged, headers go
    /// through the prefix encoding.
    pub async fn fetch(&self, target: &str, options: FetchOptions) -> RelayResult<RelayResponse> {
        // first contact reads the relay's marker vocabulary
        if self.config.load_full().is_none() {
            self.load_config().await?;
        }
        let config = self
            .config
            .load_full()
            .ok_or(RelayError::ConfigUnavailable)?;

        let wire_target = self.wire_target(target);
        let wire_headers =
            encode_request_headers(&config, &options.headers, self.credentials.as_ref())?;

        debug!(url = %wire_target, method = %options.method, "sending wire request");

        let mut request = self
            .http
            .request(options.method, &wire_target)
            .headers(wire_headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }
        let wire = request.send().await?;

        let head = decode_response_head(&config, wire.status(), wire.headers())?;
        debug!(status = %head.status, "wire response decoded");

        Ok(RelayResponse::new(&config.header_prefix, head, wire))
    }

    fn wire_target(&self, target: &str) -> String {
        format!("{}/{}", self.base_url, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let client = RelayClient::new("http://relay.example/").unwrap();
        assert_eq!(client.base_url(), "http://relay.example");

        let client = RelayClient::new("http://relay.example").unwrap();
        assert_eq!(client.base_url(), "http://relay.example");
    }

    #[test]
    fn test_wire_target_is_plain_concatenation() {
        let client = RelayClient::new("http://relay.example").unwrap();
        assert_eq!(
            client.wire_target("api/items?q=1"),
            "http://relay.example/api/items?q=1"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = RelayClient::new("not a url").unwrap_err();
        assert!(matches!(err, RelayError::BaseUrl(_)));
    }

    #[test]
    fn test_config_starts_unset() {
        let client = RelayClient::new("http://relay.example").unwrap();
        assert!(client.config().is_none());
    }
}
