// App layer: inbound HTTP surface and startup wiring.

pub mod problem;
pub mod routes;

use crate::adapters::build_http_client;
use crate::adapters::species::PokeApiClient;
use crate::adapters::translation::FunTranslationsClient;
use crate::core::lookup::PokemonLookup;
use crate::core::style::{StyleSelector, TranslatorRegistry};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::sync::Arc;

/// Wires the production upstream clients into a lookup service.
pub fn build_lookup<C: ConfigProvider + ?Sized>(config: &C) -> Result<PokemonLookup> {
    let client = build_http_client(config.request_timeout())?;

    let species = PokeApiClient::new(client.clone(), config.species_api_url())?;
    let translator = FunTranslationsClient::new(client, config.translation_api_url())?;

    let translators = TranslatorRegistry::for_all_styles(Arc::new(translator));
    tracing::debug!("Registered {} translators", translators.len());

    Ok(PokemonLookup::new(
        Arc::new(species),
        StyleSelector::default(),
        translators,
    ))
}
