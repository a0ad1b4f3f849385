//! Response-side status and header decoding.

use reqwest::header::{HeaderMap, HeaderName};
use reqwest::StatusCode;

use crate::config::schema::RelayConfig;
use crate::error::{RelayError, RelayResult};

/// Status line and header set recovered from a wire response.
#[derive(Debug)]
pub struct DecodedHead {
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HeaderMap,
}

/// Recover the origin's response head from the relay's wire response.
///
/// Only headers under the relay's prefix are the origin's; everything
/// else is the relay talking and is dropped. Forwarded headers are kept
/// under both their prefixed and stripped names, with append semantics so
/// repeated names accumulate. The encoded status line, when present,
/// overrides the wire status; otherwise the wire status and its canonical
/// reason phrase stand in.
pub fn decode_response_head(
    config: &RelayConfig,
    wire_status: StatusCode,
    wire_headers: &HeaderMap,
) -> RelayResult<DecodedHead> {
    let prefix = config.header_prefix.to_lowercase();
    let status_header = config.status_header.to_lowercase();

    let mut status = wire_status;
    let mut status_text = wire_status
        .canonical_reason()
        .unwrap_or_default()
        .to_string();
    let mut headers = HeaderMap::new();

    for (name, value) in wire_headers {
        // HeaderMap names are already lowercase
        if !name.as_str().starts_with(&prefix) {
            continue;
        }

        if name.as_str() == status_header {
            let raw = value.to_str().map_err(|_| RelayError::MalformedStatus {
                value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
            })?;
            (status, status_text) = parse_status_line(raw)?;
        } else {
            headers.append(name.clone(), value.clone());
            let stripped = HeaderName::try_from(&name.as_str()[prefix.len()..])?;
            headers.append(stripped, value.clone());
        }
    }

    Ok(DecodedHead {
        status,
        status_text,
        headers,
    })
}

/// Parse an encoded status line: `"<ignored> <code> <text...>"`.
///
/// Token 0 looks like an HTTP-version placeholder and is discarded; only
/// its slot in the encoding matters. Anything with fewer than two tokens
/// or a code `StatusCode` rejects is malformed.
fn parse_status_line(raw: &str) -> RelayResult<(StatusCode, String)> {
    let tokens: Vec<&str> = raw.split(' ').collect();
    if tokens.len() < 2 {
        return Err(RelayError::MalformedStatus {
            value: raw.to_string(),
        });
    }

    let status = tokens[1]
        .parse::<u16>()
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or_else(|| RelayError::MalformedStatus {
            value: raw.to_string(),
        })?;

    Ok((status, tokens[2..].join(" ")))
}
