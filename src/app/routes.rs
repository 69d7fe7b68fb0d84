use crate::app::problem::ApiError;
use crate::core::lookup::PokemonLookup;
use crate::domain::model::CanonicalPokemon;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<PokemonLookup>,
}

impl AppState {
    pub fn new(lookup: PokemonLookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/pokemon/:name", get(get_pokemon))
        .route("/pokemon/translated/:name", get(get_translated_pokemon))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn get_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CanonicalPokemon>, ApiError> {
    tracing::info!("Lookup: {}", name);
    let pokemon = state.lookup.get_plain(&name).await?;
    Ok(Json(pokemon))
}

async fn get_translated_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CanonicalPokemon>, ApiError> {
    tracing::info!("Translated lookup: {}", name);
    let pokemon = state.lookup.get_translated(&name).await?;
    Ok(Json(pokemon))
}
