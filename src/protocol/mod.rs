//! The header-prefix wire protocol.
//!
//! # Responsibilities
//! - Re-namespace caller headers under the relay's prefix (encode)
//! - Attach the fixed forwarding-instruction markers (encode)
//! - Recover the origin's status line and headers from the relay's
//!   response (decode)
//!
//! # Design Decisions
//! - Marker names come from one static table, never ad-hoc concatenation
//! - Decoding drops every unprefixed response header: those belong to the
//!   relay, not the origin
//! - A malformed encoded status line is an explicit error, never silent
//!   garbage

pub mod decode;
pub mod encode;
pub mod markers;
