//! Client library for header-multiplexing relay proxies.
//!
//! The relay can only pass caller and origin metadata through a single
//! custom header namespace. This crate encodes outbound requests into
//! that namespace, attaches the forwarding instructions the relay
//! understands, and decodes the relay's responses back into the status,
//! status text and headers the origin actually produced.

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod response;

pub use client::{FetchOptions, RelayClient};
pub use config::RelayConfig;
pub use error::{RelayError, RelayResult};
pub use protocol::encode::Credentials;
pub use response::RelayResponse;
