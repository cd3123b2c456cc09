use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness only; does not touch the store.
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
