use crate::core::normalizer;
use crate::domain::model::{CanonicalPokemon, SpeciesRecord};
use crate::domain::ports::SpeciesApi;
use crate::utils::error::{PokedexError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub const DEFAULT_SPECIES_API_URL: &str = "https://pokeapi.co/api/v2";

/// Species upstream client (PokeAPI).
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: Url,
}

impl PokeApiClient {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: super::parse_base_url("species_api_url", base_url)?,
        })
    }

    fn species_url(&self, name: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PokedexError::ConfigError {
                message: format!("Species API URL cannot be a base: {}", self.base_url),
            })?
            .pop_if_empty()
            .push("pokemon-species")
            .push(name);
        Ok(url)
    }

    pub async fn fetch_species(&self, name: &str) -> Result<CanonicalPokemon> {
        let not_found = || PokedexError::NotFound {
            name: name.to_string(),
        };
        let lowered = name.to_lowercase();
        // url drops "." and ".." segments, which would hit the list endpoint
        if lowered.is_empty() || lowered == "." || lowered == ".." {
            tracing::warn!("Species name '{}' is not a valid path segment", name);
            return Err(not_found());
        }
        let url = self.species_url(&lowered)?;

        tracing::debug!("Making species request to: {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Species request for '{}' failed: {}", name, e);
                return Err(not_found());
            }
        };

        let status = response.status();
        tracing::debug!("Species response status: {}", status);
        if !status.is_success() {
            tracing::warn!("Species upstream returned {} for '{}'", status, name);
            return Err(not_found());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Reading species body for '{}' failed: {}", name, e);
                return Err(not_found());
            }
        };

        let record: SpeciesRecord =
            serde_json::from_str(&body).map_err(|e| PokedexError::MalformedUpstream {
                message: e.to_string(),
            })?;

        normalizer::normalize(record)
    }
}

#[async_trait]
impl SpeciesApi for PokeApiClient {
    async fn fetch(&self, name: &str) -> Result<CanonicalPokemon> {
        self.fetch_species(name).await
    }
}
