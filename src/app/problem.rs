use crate::utils::error::PokedexError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const NOT_FOUND_TITLE: &str = "Sorry! I'm not able to find it :(";
pub const SERVER_ERROR_TITLE: &str = "Server error occurred";

/// Problem body returned for every failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    pub status: u16,
    pub title: String,
    pub detail: String,
}

/// NotFound is the only error a caller can fix; everything else is a 500.
fn status_and_title(err: &PokedexError) -> (StatusCode, &'static str) {
    if err.is_not_found() {
        (StatusCode::NOT_FOUND, NOT_FOUND_TITLE)
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_TITLE)
    }
}

impl From<&PokedexError> for ProblemDetails {
    fn from(err: &PokedexError) -> Self {
        let (status, title) = status_and_title(err);

        Self {
            status: status.as_u16(),
            title: title.to_string(),
            detail: err.to_string(),
        }
    }
}

/// Wraps a core error so handlers can return it directly.
#[derive(Debug)]
pub struct ApiError(pub PokedexError);

impl From<PokedexError> for ApiError {
    fn from(err: PokedexError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, _) = status_and_title(&self.0);
        let problem = ProblemDetails::from(&self.0);

        if status == StatusCode::NOT_FOUND {
            tracing::info!("🔍 {}", self.0);
        } else {
            tracing::error!("❌ Lookup failed: {}", self.0);
        }

        (status, Json(problem)).into_response()
    }
}
