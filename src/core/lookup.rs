use crate::core::style::{StyleSelector, TranslatorRegistry};
use crate::domain::model::CanonicalPokemon;
use crate::domain::ports::SpeciesApi;
use crate::utils::error::Result;
use std::sync::Arc;

/// Serves plain and translated lookups.
#[derive(Clone)]
pub struct PokemonLookup {
    species: Arc<dyn SpeciesApi>,
    selector: StyleSelector,
    translators: TranslatorRegistry,
}

impl PokemonLookup {
    pub fn new(
        species: Arc<dyn SpeciesApi>,
        selector: StyleSelector,
        translators: TranslatorRegistry,
    ) -> Self {
        Self {
            species,
            selector,
            translators,
        }
    }

    pub async fn get_plain(&self, name: &str) -> Result<CanonicalPokemon> {
        self.species.fetch(name).await
    }

    pub async fn get_translated(&self, name: &str) -> Result<CanonicalPokemon> {
        let mut pokemon = self.get_plain(name).await?;

        let style = self
            .selector
            .select(Some(pokemon.habitat.as_str()), pokemon.is_legendary);
        tracing::debug!(
            "Selected style '{}' for {} (habitat: {}, legendary: {})",
            style,
            pokemon.name,
            pokemon.habitat,
            pokemon.is_legendary
        );

        let translator = self.translators.resolve(style)?;
        pokemon.description = translator.translate(&pokemon.description, style).await;

        Ok(pokemon)
    }
}
