//! Feature Vector - Positionally Aligned Model Input
//!
//! Fixed-length sequence of values aligned to a `FeatureSchema`. Length
//! always equals the schema length by construction.

use serde::Serialize;
use serde_json::Value;

use crate::logic::model::InferenceError;
use super::schema::FeatureSchema;

/// Aligned model input, one value per schema slot.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureVector {
    values: Vec<Value>,
}

impl FeatureVector {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in schema order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Convert to the numeric row the classifier consumes.
    ///
    /// This is where a type mismatch finally fails: any slot that is not a
    /// JSON number is reported against its schema name.
    pub fn to_f32s(&self, schema: &FeatureSchema) -> Result<Vec<f32>, InferenceError> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                value.as_f64().map(|v| v as f32).ok_or_else(|| {
                    let name = schema
                        .names()
                        .get(i)
                        .map(String::as_str)
                        .unwrap_or("<unknown>");
                    InferenceError::NonNumeric(name.to_string())
                })
            })
            .collect()
    }
}
