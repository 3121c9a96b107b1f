//! Dispatch handler

use axum::{extract::State, Json};

use crate::models::{DispatchRequest, DispatchResponse};
use crate::{AppResult, AppState};

/// Email the assessment report to the caller-supplied address.
pub async fn send(
    State(state): State<AppState>,
    Json(request): Json<DispatchRequest>,
) -> AppResult<Json<DispatchResponse>> {
    state.dispatcher.dispatch(&request).await?;

    tracing::info!("assessment report dispatched");

    Ok(Json(DispatchResponse { success: true }))
}
