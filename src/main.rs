//! PRISM Backend Server
//!
//! Serves stress-level predictions from a pre-trained classifier, optional
//! AI-generated coping-strategy narratives, and emailed result reports.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       PRISM SERVER                         │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌─────────────┐   ┌────────────────────┐  │
//! │  │  API      │   │  Inference  │   │  Remote Calls      │  │
//! │  │  Gateway  │──▶│  Engine     │   │  (Narrative/Mail)  │  │
//! │  │  (Axum)   │   │  (ONNX)     │   │                    │  │
//! │  └───────────┘   └─────────────┘   └────────────────────┘  │
//! │        model bundle loaded once, immutable afterwards      │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::logic::connectivity::{ConnectivityProbe, HttpProbe};
use crate::logic::dispatch::{EmailIdentity, MailTransport, ResultDispatcher, SendGridMailer};
use crate::logic::insight::{GroqClient, InsightEngine, NarrativeClient};
use crate::logic::model::ModelBundle;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prism_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("PRISM server starting...");

    // Load the model bundle; serving cannot begin without it
    let model = Arc::new(ModelBundle::load(&config).expect("Failed to load model artifacts"));
    let status = model.status();
    tracing::info!(
        "Model loaded: {} ({} features, {} classes)",
        status.model_name,
        status.feature_count,
        status.class_count
    );

    // Resolve optional collaborators once; absence degrades, never crashes
    let probe: Arc<dyn ConnectivityProbe> = Arc::new(HttpProbe::new(
        config.probe_url.clone(),
        Duration::from_secs(config.probe_timeout_secs),
    ));

    let narrative = config.groq_api_key.clone().map(|key| {
        Arc::new(GroqClient::new(key, config.groq_model.clone())) as Arc<dyn NarrativeClient>
    });
    if narrative.is_none() {
        tracing::warn!("GROQ_API_KEY not set; insight generation disabled");
    }

    let transport = config
        .sendgrid_api_key
        .clone()
        .map(|key| Arc::new(SendGridMailer::new(key)) as Arc<dyn MailTransport>);
    if transport.is_none() {
        tracing::warn!("SENDGRID_API_KEY not set; result dispatch disabled");
    }

    let insight = Arc::new(InsightEngine::new(narrative, probe));
    let dispatcher = Arc::new(ResultDispatcher::new(
        transport,
        EmailIdentity {
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
            reply_to: config.reply_to_email.clone(),
        },
    ));

    // Build application state
    let state = AppState {
        config: config.clone(),
        model,
        insight,
        dispatcher,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub model: Arc<ModelBundle>,
    pub insight: Arc<InsightEngine>,
    pub dispatcher: Arc<ResultDispatcher>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check))
        .route("/api/v1/predict", post(handlers::predict::predict))
        .route("/api/v1/insight", post(handlers::insight::generate))
        .route("/api/v1/dispatch", post(handlers::dispatch::send))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &config::Config) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match config.cors_allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!("invalid CORS_ALLOWED_ORIGIN, allowing any origin");
            layer.allow_origin(Any)
        }
    }
}
