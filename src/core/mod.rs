pub mod lookup;
pub mod normalizer;
pub mod style;

pub use crate::domain::model::{CanonicalPokemon, Style};
pub use crate::domain::ports::{ConfigProvider, SpeciesApi, TranslationApi};
pub use crate::utils::error::Result;
