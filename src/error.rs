//! Error handling
//!
//! Every failure is converted to a structured JSON response at the handler
//! boundary; nothing panics the serving process and nothing is retried here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::logic::dispatch::DispatchError;
use crate::logic::model::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Caller-supplied data problems
    Validation(String),

    // Model rejected the vector or failed internally
    Inference(String),

    // Remote narrative service unavailable or failed
    NarrativeService(String),

    // Mail transport failed or rejected the delivery
    Dispatch(String),

    // Server missing a required credential; operator action needed
    Configuration(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::Inference(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.as_str())
            }
            AppError::NarrativeService(msg) => {
                tracing::error!("Narrative service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.as_str())
            }
            AppError::Dispatch(msg) => {
                tracing::error!("Dispatch error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.as_str())
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.as_str())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Inference(err.to_string())
    }
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Validation(msg) => AppError::Validation(msg),
            DispatchError::Configuration(msg) => AppError::Configuration(msg),
            other => AppError::Dispatch(other.to_string()),
        }
    }
}
