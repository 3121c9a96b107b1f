//! Insight Module - Coping-Strategy Narrative
//!
//! Builds the narrative prompt, talks to the remote generation service, and
//! degrades cleanly when the service is not configured or the network is
//! down.

pub mod client;
pub mod engine;
pub mod prompt;

// Re-export common types
pub use client::{GroqClient, NarrativeClient, NarrativeError};
pub use engine::{InsightEngine, InsightResult};
