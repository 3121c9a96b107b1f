//! Insight request/response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::prediction::RawAnswers;

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    #[serde(default)]
    pub answers: RawAnswers,
    #[serde(default)]
    pub prediction: Value,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub insight: Option<String>,
    pub offline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
