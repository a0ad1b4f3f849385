//! Discovery document loading from the relay.

use reqwest::Client;
use tracing::debug;

use crate::config::schema::RelayConfig;
use crate::config::validation::validate_config;
use crate::error::{RelayError, RelayResult};

/// Well-known path of the discovery document on the relay.
pub const DISCOVERY_PATH: &str = "/.meta";

/// Fetch and validate the relay's discovery document.
///
/// Issues a single `GET <base_url>/.meta` with no credentials attached;
/// discovery is treated as a public endpoint. No retries: any network or
/// parse failure is returned to the caller, who may simply call again.
pub async fn load_config(http: &Client, base_url: &str) -> RelayResult<RelayConfig> {
    let url = format!("{base_url}{DISCOVERY_PATH}");
    debug!(url = %url, "loading relay discovery document");

    let response = http.get(&url).send().await.map_err(RelayError::Config)?;
    let config: RelayConfig = response.json().await.map_err(RelayError::Config)?;

    validate_config(&config).map_err(RelayError::Validation)?;

    debug!(header_prefix = %config.header_prefix, "relay discovery document loaded");
    Ok(config)
}
