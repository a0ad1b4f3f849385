//! Discovery document schema definitions.
//!
//! The relay publishes the marker vocabulary it understands as a small
//! JSON document. All types derive Serde traits for deserialization from
//! that document; field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Marker vocabulary of a relay, loaded once per client.
///
/// Immutable once loaded: the client never edits a stored document, it
/// can only replace the whole record by reloading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayConfig {
    /// Prefix applied to every forwarded header name.
    pub header_prefix: String,

    /// Prefix for marker headers selecting which caller request headers
    /// the relay forwards to the origin as-is.
    pub forward_request_header_prefix: String,

    /// Prefix for marker headers selecting which origin response headers
    /// the relay passes back to the caller unprefixed.
    pub forward_response_header_prefix: String,

    /// Marker header requesting the true origin status line back as a
    /// side channel.
    pub forward_response_status_header: String,

    /// Full name of the response header carrying the encoded status line.
    /// Lives under `header_prefix` so it survives the relay's own header
    /// filtering.
    pub status_header: String,
}
