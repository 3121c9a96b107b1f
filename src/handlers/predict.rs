//! Prediction handler

use axum::{extract::State, Json};

use crate::models::{PredictResponse, RawAnswers};
use crate::{AppResult, AppState};

/// Align the submitted answers, run the classifier, decode the label.
pub async fn predict(
    State(state): State<AppState>,
    Json(answers): Json<RawAnswers>,
) -> AppResult<Json<PredictResponse>> {
    let schema = state.model.schema();
    let vector = schema.align(&answers);

    tracing::debug!(
        provided = answers.len(),
        aligned = vector.len(),
        "answers aligned to feature layout"
    );

    let prediction = state.model.predict(&vector)?;

    Ok(Json(PredictResponse { prediction }))
}
