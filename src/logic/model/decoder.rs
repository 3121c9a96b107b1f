//! Label Decoder
//!
//! Maps raw class indices back to the human-readable labels the model was
//! trained with. The class list is a pre-built artifact; index order matches
//! the encoder used at training time.

use super::classifier::InferenceError;

/// Decodes raw class indices into class labels.
#[derive(Debug, Clone)]
pub struct LabelDecoder {
    classes: Vec<String>,
}

impl LabelDecoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Number of known classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Decode a raw class index into its label.
    pub fn decode(&self, class: i64) -> Result<&str, InferenceError> {
        usize::try_from(class)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClass(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder() -> LabelDecoder {
        LabelDecoder::new(vec![
            "Low".to_string(),
            "Moderate".to_string(),
            "High".to_string(),
        ])
    }

    #[test]
    fn decodes_known_classes() {
        let decoder = decoder();
        assert_eq!(decoder.decode(0).unwrap(), "Low");
        assert_eq!(decoder.decode(2).unwrap(), "High");
    }

    #[test]
    fn rejects_out_of_range_class() {
        let err = decoder().decode(3).unwrap_err();
        assert!(matches!(err, InferenceError::UnknownClass(3)));
    }

    #[test]
    fn rejects_negative_class() {
        let err = decoder().decode(-1).unwrap_err();
        assert!(matches!(err, InferenceError::UnknownClass(-1)));
    }
}
