//! Logical response surface returned to callers.

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::RelayResult;
use crate::protocol::decode::DecodedHead;

/// Response as the origin produced it, reconstructed from the relay's
/// wire response.
///
/// Status, status text and headers are the decoded logical values; the
/// body is the wire response's body, streamed through untouched.
#[derive(Debug)]
pub struct RelayResponse {
    header_prefix: String,
    head: DecodedHead,
    inner: reqwest::Response,
}

impl RelayResponse {
    pub(crate) fn new(header_prefix: &str, head: DecodedHead, inner: reqwest::Response) -> Self {
        Self {
            header_prefix: header_prefix.to_string(),
            head,
            inner,
        }
    }

    /// True origin status when the relay reported one, the wire status
    /// otherwise.
    pub fn status(&self) -> StatusCode {
        self.head.status
    }

    /// Status text accompanying [`status`](Self::status).
    pub fn status_text(&self) -> &str {
        &self.head.status_text
    }

    /// Decoded origin headers. Each forwarded header is present twice,
    /// under its prefixed and its stripped name.
    pub fn headers(&self) -> &HeaderMap {
        &self.head.headers
    }

    /// Forwarded origin header by its unprefixed name.
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.head.headers.get(name)
    }

    /// Forwarded origin header looked up under its prefixed name.
    pub fn prefixed_header(&self, name: &str) -> Option<&HeaderValue> {
        self.head
            .headers
            .get(format!("{}{}", self.header_prefix, name))
    }

    /// Full body as bytes.
    pub async fn bytes(self) -> RelayResult<Bytes> {
        Ok(self.inner.bytes().await?)
    }

    /// Full body as text.
    pub async fn text(self) -> RelayResult<String> {
        Ok(self.inner.text().await?)
    }

    /// Body deserialized as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> RelayResult<T> {
        Ok(self.inner.json().await?)
    }

    /// The underlying wire response, for callers that want to stream the
    /// body themselves. Its status and headers are the relay's, not the
    /// origin's.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}
