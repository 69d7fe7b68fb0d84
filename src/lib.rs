pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::routes::{create_router, AppState};
pub use app::build_lookup;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{lookup::PokemonLookup, style::StyleSelector, style::TranslatorRegistry};
pub use domain::model::{CanonicalPokemon, Style};
pub use utils::error::{PokedexError, Result};
