//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::logic::model::EngineStatus;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    engine: EngineStatus,
}

/// Plain liveness line for the root path.
pub async fn root() -> &'static str {
    "Stress Prediction API is running!"
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        engine: state.model.status(),
    })
}
