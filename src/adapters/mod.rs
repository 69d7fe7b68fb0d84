// Adapters layer: outbound HTTP clients implementing the domain ports.

pub mod species;
pub mod translation;

use crate::utils::error::{PokedexError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// One client shared by both upstreams; the timeout bounds every outbound call.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PokedexError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })
}

fn parse_base_url(field_name: &str, base_url: &str) -> Result<Url> {
    validate_url(field_name, base_url)?;
    Url::parse(base_url).map_err(|e| PokedexError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: base_url.to_string(),
        reason: e.to_string(),
    })
}
