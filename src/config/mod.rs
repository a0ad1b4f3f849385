//! Relay discovery configuration subsystem.
//!
//! # Data Flow
//! ```text
//! GET <base_url>/.meta (JSON)
//!     → loader.rs (fetch & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → stored in the client's swap slot, replaced wholesale on reload
//! ```
//!
//! # Design Decisions
//! - A loaded document is immutable; reloading swaps the whole record
//! - No retries and no caching policy here: one fetch per explicit or
//!   lazy load, failures surface to the caller
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::RelayConfig;
