//! Prediction request/response types

use serde::Serialize;

/// Unordered answer map as submitted by the caller. Keys the model does not
/// know are ignored; missing keys are defaulted during alignment.
pub type RawAnswers = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
}
