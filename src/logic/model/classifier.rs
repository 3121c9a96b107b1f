//! Classifier - ONNX Runtime Integration
//!
//! Single-row classification behind a trait so the engine can swap the
//! backing runtime. The production implementation runs an ONNX session
//! exported from the trained classifier.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use thiserror::Error;

/// Inference failures: the model rejected the vector or failed internally.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("non-numeric value for feature `{0}`")]
    NonNumeric(String),

    #[error("feature vector has {got} values, model expects {expected}")]
    Dimension { got: usize, expected: usize },

    #[error("model error: {0}")]
    Model(String),

    #[error("unknown class index {0}")]
    UnknownClass(i64),
}

/// Trait for classification backends (ONNX today, anything else tomorrow).
pub trait Classifier: Send + Sync {
    /// Classify a single feature row into a raw class index.
    fn predict_class(&self, features: &[f32]) -> Result<i64, InferenceError>;
}

/// ONNX-backed classifier.
///
/// The session is serialized behind a mutex: `ort` needs `&mut` access to
/// run, and the runtime makes no concurrent-inference guarantee for a single
/// session anyway.
#[derive(Debug)]
pub struct OnnxClassifier {
    session: Mutex<Session>,
}

impl OnnxClassifier {
    /// Load the classifier from an ONNX file.
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError::Model(format!(
                "Model not found: {}",
                model_path
            )));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::Model(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Model(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Model(format!("Failed to load model: {}", e)))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict_class(&self, features: &[f32]) -> Result<i64, InferenceError> {
        let mut session = self.session.lock();

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| InferenceError::Model("No output defined".to_string()))?;

        let input_array = Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| InferenceError::Model(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Model(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Model(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError::Model("No output".to_string()))?;

        // Classifiers exported from tree ensembles emit an int64 label
        // tensor first; score-only exports need an argmax over f32 scores.
        if let Ok(label_tensor) = output.try_extract_tensor::<i64>() {
            let labels = label_tensor.1;
            return labels
                .first()
                .copied()
                .ok_or_else(|| InferenceError::Model("Empty label tensor".to_string()));
        }

        let score_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Model(format!("Extract error: {}", e)))?;
        let scores = score_tensor.1;

        if scores.is_empty() {
            return Err(InferenceError::Model("Empty score tensor".to_string()));
        }

        let mut best = 0usize;
        for (i, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = i;
            }
        }

        Ok(best as i64)
    }
}
