//! Insight Engine
//!
//! Orchestrates one narrative generation: capability check, connectivity
//! check, then a single remote call. Exactly one outcome arm is produced and
//! at most one network call is made per invocation.

use std::sync::Arc;

use serde_json::Value;

use crate::logic::connectivity::ConnectivityProbe;
use crate::models::RawAnswers;
use super::client::NarrativeClient;
use super::prompt::{coping_strategy_prompt, SYSTEM_ROLE};

/// Outcome of one insight orchestration.
#[derive(Debug, Clone, PartialEq)]
pub enum InsightResult {
    /// Narrative generated by the remote service.
    Generated { content: String },
    /// Connectivity absent; a designed-in degraded outcome, not an error.
    Offline,
    /// The service is not configured, or the remote call failed.
    Failed { reason: String },
}

/// Narrative orchestration over the configured collaborators.
///
/// The narrative client is resolved once at startup: `None` means the
/// credential was absent and every request short-circuits without touching
/// the network.
pub struct InsightEngine {
    narrative: Option<Arc<dyn NarrativeClient>>,
    probe: Arc<dyn ConnectivityProbe>,
}

impl InsightEngine {
    pub fn new(
        narrative: Option<Arc<dyn NarrativeClient>>,
        probe: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        Self { narrative, probe }
    }

    /// Generate a coping-strategy narrative for one prediction.
    pub async fn generate(&self, answers: &RawAnswers, prediction: &Value) -> InsightResult {
        let Some(client) = self.narrative.as_ref() else {
            return InsightResult::Failed {
                reason: "narrative service not configured".to_string(),
            };
        };

        if !self.probe.is_reachable().await {
            tracing::info!("connectivity probe failed, returning offline insight");
            return InsightResult::Offline;
        }

        let prompt = coping_strategy_prompt(answers, prediction);

        match client.generate(SYSTEM_ROLE, &prompt).await {
            Ok(content) => InsightResult::Generated { content },
            Err(e) => {
                tracing::error!("narrative generation failed: {}", e);
                InsightResult::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
