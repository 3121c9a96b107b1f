//! Insight handler

use axum::{extract::State, Json};

use crate::logic::insight::InsightResult;
use crate::models::{InsightRequest, InsightResponse};
use crate::{AppError, AppResult, AppState};

/// Generate the coping-strategy narrative for a prediction.
///
/// Offline is a 200 with `offline: true`, not an error: the caller shows the
/// prediction without a narrative.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<InsightRequest>,
) -> AppResult<Json<InsightResponse>> {
    match state.insight.generate(&request.answers, &request.prediction).await {
        InsightResult::Generated { content } => Ok(Json(InsightResponse {
            insight: Some(content),
            offline: false,
            message: None,
        })),
        InsightResult::Offline => Ok(Json(InsightResponse {
            insight: None,
            offline: true,
            message: Some("No internet connection. Insight unavailable.".to_string()),
        })),
        InsightResult::Failed { reason } => Err(AppError::NarrativeService(reason)),
    }
}
