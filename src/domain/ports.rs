use crate::domain::model::{CanonicalPokemon, Style};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Looks up a species by name and returns it normalized.
#[async_trait]
pub trait SpeciesApi: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<CanonicalPokemon>;
}

/// Rewords text in a given style.
///
/// Implementations never fail: on any upstream problem they hand back the
/// input text unchanged.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    async fn translate(&self, text: &str, style: Style) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn species_api_url(&self) -> &str;
    fn translation_api_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use crate::utils::error::PokedexError;
    use std::sync::Mutex;

    /// Returns a fixed record, or `NotFound` for any other name.
    pub struct MockSpecies {
        pub pokemon: Option<CanonicalPokemon>,
    }

    impl MockSpecies {
        pub fn with(name: &str, habitat: &str, is_legendary: bool) -> Self {
            Self {
                pokemon: Some(CanonicalPokemon {
                    name: name.to_string(),
                    description: format!("{} description", name),
                    habitat: habitat.to_string(),
                    is_legendary,
                }),
            }
        }

        pub fn empty() -> Self {
            Self { pokemon: None }
        }
    }

    #[async_trait]
    impl SpeciesApi for MockSpecies {
        async fn fetch(&self, name: &str) -> Result<CanonicalPokemon> {
            match &self.pokemon {
                Some(p) if p.name == name.to_lowercase() => Ok(p.clone()),
                _ => Err(PokedexError::NotFound {
                    name: name.to_string(),
                }),
            }
        }
    }

    /// Prefixes the text with the style tag and remembers every call.
    #[derive(Default)]
    pub struct RecordingTranslator {
        pub calls: Mutex<Vec<(String, Style)>>,
    }

    impl RecordingTranslator {
        pub fn styles(&self) -> Vec<Style> {
            self.calls
                .lock()
                .map(|calls| calls.iter().map(|(_, s)| *s).collect())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl TranslationApi for RecordingTranslator {
        async fn translate(&self, text: &str, style: Style) -> String {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((text.to_string(), style));
            }
            format!("[{}] {}", style, text)
        }
    }

    /// Behaves like an upstream that is always down.
    pub struct UnavailableTranslator;

    #[async_trait]
    impl TranslationApi for UnavailableTranslator {
        async fn translate(&self, text: &str, _style: Style) -> String {
            text.to_string()
        }
    }
}
