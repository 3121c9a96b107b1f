//! Alignment Tests
//!
//! The alignment contract: fixed length, schema order, zero-fill for missing
//! keys, silent drop for unknown keys, no type checking.

mod alignment_tests {
    use serde_json::{Map, Value};

    use crate::logic::features::FeatureSchema;
    use crate::logic::model::InferenceError;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec!["q1".to_string(), "q2".to_string(), "q3".to_string()])
    }

    fn answers(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn fills_missing_keys_with_zero() {
        let schema = schema();
        let vector = schema.align(&answers(&[("q1", Value::from(3)), ("q2", Value::from(5))]));

        assert_eq!(vector.len(), 3);
        assert_eq!(vector.to_f32s(&schema).unwrap(), vec![3.0, 5.0, 0.0]);
    }

    #[test]
    fn ignores_extraneous_keys() {
        let schema = schema();
        let with_extra = schema.align(&answers(&[
            ("q1", Value::from(3)),
            ("q2", Value::from(5)),
            ("not_a_feature", Value::from(99)),
        ]));
        let without_extra =
            schema.align(&answers(&[("q1", Value::from(3)), ("q2", Value::from(5))]));

        assert_eq!(
            with_extra.to_f32s(&schema).unwrap(),
            without_extra.to_f32s(&schema).unwrap()
        );
    }

    #[test]
    fn output_follows_schema_order_not_input_order() {
        let schema = schema();
        let vector = schema.align(&answers(&[
            ("q3", Value::from(7)),
            ("q1", Value::from(1)),
            ("q2", Value::from(4)),
        ]));

        assert_eq!(vector.to_f32s(&schema).unwrap(), vec![1.0, 4.0, 7.0]);
    }

    #[test]
    fn empty_answers_align_to_all_zeros() {
        let schema = schema();
        let vector = schema.align(&Map::new());

        assert_eq!(vector.len(), 3);
        assert_eq!(vector.to_f32s(&schema).unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn alignment_accepts_non_numeric_values() {
        // Alignment is total; the mismatch only fails numeric conversion.
        let schema = schema();
        let vector = schema.align(&answers(&[("q2", Value::from("often"))]));

        assert_eq!(vector.len(), 3);
        let err = vector.to_f32s(&schema).unwrap_err();
        assert!(matches!(err, InferenceError::NonNumeric(ref name) if name == "q2"));
    }

    #[test]
    fn fractional_and_integer_answers_both_convert() {
        let schema = schema();
        let vector = schema.align(&answers(&[
            ("q1", Value::from(2.5)),
            ("q2", Value::from(4)),
        ]));

        assert_eq!(vector.to_f32s(&schema).unwrap(), vec![2.5, 4.0, 0.0]);
    }
}
