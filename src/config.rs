//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Origin allowed to call the API from a browser
    pub cors_allowed_origin: String,

    /// ONNX classifier artifact
    pub model_path: String,

    /// Label classes artifact (JSON string array)
    pub labels_path: String,

    /// Ordered feature names artifact (JSON string array)
    pub features_path: String,

    /// Narrative service credential; absent means insight runs degraded
    pub groq_api_key: Option<String>,

    /// Narrative model selection
    pub groq_model: String,

    /// Mail transport credential; absent disables dispatch only
    pub sendgrid_api_key: Option<String>,

    /// Sender identity for dispatched reports
    pub from_email: String,
    pub from_name: String,
    pub reply_to_email: String,

    /// Connectivity probe target and bound
    pub probe_url: String,
    pub probe_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let from_email =
            env::var("FROM_EMAIL").unwrap_or_else(|_| "no-reply@prism.app".to_string());

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/stress_rf.onnx".to_string()),

            labels_path: env::var("LABELS_PATH")
                .unwrap_or_else(|_| "models/label_classes.json".to_string()),

            features_path: env::var("FEATURES_PATH")
                .unwrap_or_else(|_| "models/final_features.json".to_string()),

            groq_api_key: env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty()),

            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),

            sendgrid_api_key: env::var("SENDGRID_API_KEY").ok().filter(|k| !k.is_empty()),

            reply_to_email: env::var("REPLY_TO_EMAIL").unwrap_or_else(|_| from_email.clone()),

            from_name: env::var("FROM_NAME").unwrap_or_else(|_| "PRISM".to_string()),

            from_email,

            probe_url: env::var("CONNECTIVITY_PROBE_URL")
                .unwrap_or_else(|_| "https://www.google.com".to_string()),

            probe_timeout_secs: env::var("CONNECTIVITY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }
}
