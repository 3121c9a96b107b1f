//! Model Bundle - Pre-Built Artifacts
//!
//! The three immutable artifacts the service needs: classifier session,
//! label classes, and the ordered feature schema. Loaded once before serving
//! begins; a load failure is fatal at startup, never a per-request error.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;

use crate::config::Config;
use crate::logic::features::{FeatureSchema, FeatureVector};
use super::classifier::{Classifier, InferenceError, OnnxClassifier};
use super::decoder::LabelDecoder;

/// Engine status for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub model_name: String,
    pub feature_count: usize,
    pub class_count: usize,
    pub inference_count: u64,
    pub avg_latency_us: f32,
}

/// Immutable model bundle shared by all requests.
pub struct ModelBundle {
    schema: FeatureSchema,
    classifier: Box<dyn Classifier>,
    decoder: LabelDecoder,
    model_name: String,

    // Latency stats
    inference_count: AtomicU64,
    latency_sum_us: AtomicU64,
}

impl ModelBundle {
    /// Load all three artifacts from the configured paths.
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let names = load_string_array(&config.features_path)
            .context("loading feature schema artifact")?;
        let classes = load_string_array(&config.labels_path)
            .context("loading label classes artifact")?;

        if names.is_empty() {
            anyhow::bail!("feature schema artifact is empty: {}", config.features_path);
        }
        if classes.is_empty() {
            anyhow::bail!("label classes artifact is empty: {}", config.labels_path);
        }

        let classifier = OnnxClassifier::load(&config.model_path)?;

        let model_name = Path::new(&config.model_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| config.model_path.clone());

        Ok(Self::with_parts(
            FeatureSchema::new(names),
            Box::new(classifier),
            LabelDecoder::new(classes),
            model_name,
        ))
    }

    /// Assemble a bundle from already-built parts.
    pub fn with_parts(
        schema: FeatureSchema,
        classifier: Box<dyn Classifier>,
        decoder: LabelDecoder,
        model_name: String,
    ) -> Self {
        Self {
            schema,
            classifier,
            decoder,
            model_name,
            inference_count: AtomicU64::new(0),
            latency_sum_us: AtomicU64::new(0),
        }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Classify one aligned vector and decode the result.
    ///
    /// Deterministic: same vector against the same artifacts yields the same
    /// label. The only side effects are diagnostic - a debug log line and the
    /// latency counters, neither of which influences the result.
    pub fn predict(&self, vector: &FeatureVector) -> Result<String, InferenceError> {
        let features = vector.to_f32s(&self.schema)?;

        if features.len() != self.schema.len() {
            return Err(InferenceError::Dimension {
                got: features.len(),
                expected: self.schema.len(),
            });
        }

        let start = Instant::now();
        let class = self.classifier.predict_class(&features)?;
        let label = self.decoder.decode(class)?.to_string();

        // Track metrics
        self.latency_sum_us
            .fetch_add(start.elapsed().as_micros() as u64, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(class, label = %label, "inference complete");

        Ok(label)
    }

    pub fn status(&self) -> EngineStatus {
        let count = self.inference_count.load(Ordering::Relaxed);
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let avg = if count > 0 {
            sum as f32 / count as f32
        } else {
            0.0
        };

        EngineStatus {
            model_name: self.model_name.clone(),
            feature_count: self.schema.len(),
            class_count: self.decoder.len(),
            inference_count: count,
            avg_latency_us: avg,
        }
    }
}

/// Read a JSON string-array artifact (feature names, label classes).
fn load_string_array(path: &str) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let values: Vec<String> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::atomic::AtomicUsize;

    use serde_json::{Map, Value};

    use super::*;

    struct StubClassifier {
        class: i64,
        calls: AtomicUsize,
    }

    impl StubClassifier {
        fn new(class: i64) -> Self {
            Self {
                class,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl Classifier for StubClassifier {
        fn predict_class(&self, _features: &[f32]) -> Result<i64, InferenceError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(self.class)
        }
    }

    fn bundle(class: i64) -> ModelBundle {
        ModelBundle::with_parts(
            FeatureSchema::new(vec!["q1".to_string(), "q2".to_string(), "q3".to_string()]),
            Box::new(StubClassifier::new(class)),
            LabelDecoder::new(vec![
                "Low".to_string(),
                "Moderate".to_string(),
                "High".to_string(),
            ]),
            "stub".to_string(),
        )
    }

    fn answers(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn predict_is_deterministic() {
        let bundle = bundle(2);
        let vector = bundle
            .schema()
            .align(&answers(&[("q1", Value::from(3)), ("q2", Value::from(5))]));

        let first = bundle.predict(&vector).unwrap();
        let second = bundle.predict(&vector).unwrap();

        assert_eq!(first, "High");
        assert_eq!(first, second);
    }

    #[test]
    fn non_numeric_value_fails_inference_with_feature_name() {
        let bundle = bundle(0);
        let vector = bundle
            .schema()
            .align(&answers(&[("q1", Value::from("often"))]));

        let err = bundle.predict(&vector).unwrap_err();
        assert!(matches!(err, InferenceError::NonNumeric(ref name) if name == "q1"));
    }

    #[test]
    fn undecodable_class_fails_inference() {
        let bundle = bundle(42);
        let vector = bundle.schema().align(&answers(&[("q1", Value::from(1))]));

        let err = bundle.predict(&vector).unwrap_err();
        assert!(matches!(err, InferenceError::UnknownClass(42)));
    }

    #[test]
    fn mismatched_vector_width_fails_inference() {
        let bundle = bundle(0);
        let narrow = FeatureSchema::new(vec!["q1".to_string()]);
        let vector = narrow.align(&answers(&[("q1", Value::from(1))]));

        let err = bundle.predict(&vector).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::Dimension {
                got: 1,
                expected: 3
            }
        ));
    }

    #[test]
    fn status_tracks_inference_count() {
        let bundle = bundle(1);
        let vector = bundle.schema().align(&answers(&[("q1", Value::from(2))]));

        assert_eq!(bundle.status().inference_count, 0);
        bundle.predict(&vector).unwrap();
        bundle.predict(&vector).unwrap();

        let status = bundle.status();
        assert_eq!(status.inference_count, 2);
        assert_eq!(status.feature_count, 3);
        assert_eq!(status.class_count, 3);
    }

    #[test]
    fn loads_string_array_artifacts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Low", "Moderate", "High"]"#).unwrap();

        let classes = load_string_array(file.path().to_str().unwrap()).unwrap();
        assert_eq!(classes, vec!["Low", "Moderate", "High"]);
    }

    #[test]
    fn rejects_malformed_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();

        assert!(load_string_array(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn missing_artifact_file_fails() {
        assert!(load_string_array("/nonexistent/final_features.json").is_err());
    }
}
