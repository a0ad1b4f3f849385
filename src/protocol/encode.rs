//! Request-side header encoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};

use crate::config::schema::RelayConfig;
use crate::error::RelayResult;
use crate::protocol::markers::{
    indexed, FORWARD_STATUS_VALUE, REQUEST_FORWARD_PATTERNS, RESPONSE_FORWARD_PATTERNS,
};

/// Basic-auth credentials for the relay hop itself.
///
/// These authenticate against the relay (or a hop it protects), not the
/// origin, so the resulting `Authorization` header is set directly and is
/// not subject to the prefixing scheme.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

impl Credentials {
    /// `base64(username:password)`, empty password when none was given.
    pub fn encoded(&self) -> String {
        let password = self.password.as_deref().unwrap_or_default();
        STANDARD.encode(format!("{}:{}", self.username, password))
    }
}

/// Build the wire header map for one outbound request.
///
/// Caller headers are re-emitted under the relay's namespace with append
/// semantics, so multi-valued headers keep every value. The marker set is
/// fixed: one status-request marker plus the full request- and
/// response-forwarding tables, regardless of caller input.
pub fn encode_request_headers(
    config: &RelayConfig,
    caller_headers: &HeaderMap,
    credentials: Option<&Credentials>,
) -> RelayResult<HeaderMap> {
    let mut wire = HeaderMap::new();

    for (name, value) in caller_headers {
        let prefixed =
            HeaderName::try_from(format!("{}{}", config.header_prefix, name.as_str()))?;
        wire.append(prefixed, value.clone());
    }

    // ask the relay to report the origin's true status line
    wire.insert(
        HeaderName::try_from(config.forward_response_status_header.as_str())?,
        HeaderValue::from_static(FORWARD_STATUS_VALUE),
    );

    for (name, pattern) in indexed(
        &config.forward_request_header_prefix,
        &REQUEST_FORWARD_PATTERNS,
    ) {
        wire.insert(HeaderName::try_from(name)?, HeaderValue::from_static(pattern));
    }

    for (name, pattern) in indexed(
        &config.forward_response_header_prefix,
        &RESPONSE_FORWARD_PATTERNS,
    ) {
        wire.insert(HeaderName::try_from(name)?, HeaderValue::from_static(pattern));
    }

    if let Some(credentials) = credentials {
        let mut value = HeaderValue::try_from(format!("Basic {}", credentials.encoded()))?;
        value.set_sensitive(true);
        wire.insert(AUTHORIZATION, value);
    }

    Ok(wire)
}
