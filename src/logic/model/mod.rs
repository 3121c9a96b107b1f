//! Model Module - Inference Engine
//!
//! Wraps the pre-built model artifacts: the ONNX classifier session, the
//! label decoder, and the feature schema. Loaded once at startup, read-only
//! afterwards.

pub mod bundle;
pub mod classifier;
pub mod decoder;

// Re-export common types
pub use bundle::{EngineStatus, ModelBundle};
pub use classifier::{Classifier, InferenceError, OnnxClassifier};
pub use decoder::LabelDecoder;
