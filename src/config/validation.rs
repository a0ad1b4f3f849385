//! Discovery document validation.
//!
//! Serde handles the syntactic checks; this rejects documents that parse
//! but cannot drive the protocol. An empty `headerPrefix`, for example,
//! would make every relay response header look origin-owned.

use crate::config::schema::RelayConfig;

/// A semantic problem with a parsed discovery document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: &'static str,
    problem: &'static str,
}

impl ValidationError {
    pub(crate) fn empty_field(field: &'static str) -> Self {
        Self {
            field,
            problem: "must not be empty",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.problem)
    }
}

/// Validate a parsed discovery document.
///
/// Returns all problems found, not just the first.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let fields = [
        ("headerPrefix", &config.header_prefix),
        (
            "forwardRequestHeaderPrefix",
            &config.forward_request_header_prefix,
        ),
        (
            "forwardResponseHeaderPrefix",
            &config.forward_response_header_prefix,
        ),
        (
            "forwardResponseStatusHeader",
            &config.forward_response_status_header,
        ),
        ("statusHeader", &config.status_header),
    ];

    let errors: Vec<ValidationError> = fields
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| ValidationError::empty_field(field))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
