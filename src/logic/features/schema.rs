//! Feature Schema - Ordered Feature Layout
//!
//! The ordered list of feature names the trained model was built against.
//! Order is fixed at model-build time and never changes for a given model;
//! the schema artifact is the single source of truth for that order.

use serde_json::Value;

use crate::models::RawAnswers;
use super::vector::FeatureVector;

/// Ordered feature layout for one trained model.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Number of feature slots (N).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Feature names in vector order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Re-project an unordered answer map onto this schema.
    ///
    /// For each slot, in order: take the matching answer value, or numeric 0
    /// when the key is absent. Keys with no slot are dropped silently. Values
    /// are carried as-is - a non-numeric value is not an alignment problem,
    /// it surfaces later when the vector is converted for inference.
    pub fn align(&self, answers: &RawAnswers) -> FeatureVector {
        let values = self
            .names
            .iter()
            .map(|name| answers.get(name).cloned().unwrap_or_else(|| Value::from(0)))
            .collect();

        FeatureVector::new(values)
    }
}
