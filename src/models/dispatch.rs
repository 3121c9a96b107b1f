//! Dispatch request/response types

use serde::{Deserialize, Serialize};

use super::prediction::RawAnswers;

/// Prediction summary as the caller previously received it. Unknown fields
/// are ignored; the insight field covers callers that embed the narrative in
/// the prediction object instead of sending it separately.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionSummary {
    #[serde(rename = "stressLevel")]
    pub stress_level: Option<String>,
    pub insight: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub email: Option<String>,
    pub answers: Option<RawAnswers>,
    pub prediction: Option<PredictionSummary>,
    pub insight: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub success: bool,
}
