//! Prediction from comma-separated user parameters.

pub mod error;
pub mod model;

pub use error::PredictionError;
pub use model::LinearModel;

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses `"1.5, 2, 3e2"` into decimals.
///
/// Pieces are trimmed; plain and scientific notation are accepted.
pub fn parse_parameters(input: &str) -> Result<Vec<Decimal>, PredictionError> {
    if input.trim().is_empty() {
        return Err(PredictionError::Empty);
    }

    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, piece)| {
            Decimal::from_str(piece)
                .or_else(|_| Decimal::from_scientific(piece))
                .map_err(|_| PredictionError::InvalidNumber {
                    position,
                    value: piece.to_string(),
                })
        })
        .collect()
}

/// Output fragment shown under the parameters input.
#[must_use]
pub fn format_prediction(value: Decimal) -> String {
    format!("Predicted Value: {}", value.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn model() -> LinearModel {
        LinearModel {
            intercept: dec!(10),
            coefficients: vec![dec!(2), dec!(0.5)],
        }
    }

    #[rstest]
    #[case("1,2", vec![dec!(1), dec!(2)])]
    #[case(" 1.5 , -2 ", vec![dec!(1.5), dec!(-2)])]
    #[case("3e2,1E-1", vec![dec!(300), dec!(0.1)])]
    #[case("42", vec![dec!(42)])]
    fn test_parse_parameters(#[case] input: &str, #[case] expected: Vec<Decimal>) {
        assert_eq!(parse_parameters(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_parse_empty(#[case] input: &str) {
        assert!(matches!(parse_parameters(input), Err(PredictionError::Empty)));
    }

    #[rstest]
    #[case("1,abc", 1, "abc")]
    #[case("1,,2", 1, "")]
    #[case("x", 0, "x")]
    fn test_parse_invalid(#[case] input: &str, #[case] position: usize, #[case] value: &str) {
        match parse_parameters(input) {
            Err(PredictionError::InvalidNumber { position: p, value: v }) => {
                assert_eq!(p, position);
                assert_eq!(v, value);
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_predict() {
        let value = model().predict(&[dec!(3), dec!(4)]).unwrap();
        assert_eq!(value, dec!(18));
        assert_eq!(format_prediction(value), "Predicted Value: 18");
    }

    #[test]
    fn test_predict_shape_mismatch() {
        let err = model().predict(&[dec!(1)]).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::ShapeMismatch { expected: 2, actual: 1 }
        ));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_predict_overflow() {
        let model = LinearModel {
            intercept: Decimal::MAX,
            coefficients: vec![dec!(1)],
        };
        assert!(matches!(model.predict(&[dec!(1)]), Err(PredictionError::Overflow)));
    }

    #[test]
    fn test_model_from_json() {
        let model = LinearModel::from_json(br#"{"intercept": "10", "coefficients": ["2", "0.5"]}"#)
            .unwrap();
        assert_eq!(model, self::model());
        assert_eq!(model.features(), 2);
    }

    #[test]
    fn test_model_without_coefficients_is_rejected() {
        let err = LinearModel::from_json(br#"{"intercept": "1", "coefficients": []}"#).unwrap_err();
        assert!(matches!(err, PredictionError::NoCoefficients(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_model_load_missing_file() {
        let err = LinearModel::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, PredictionError::Io { .. }));
    }

    #[test]
    fn test_model_load_from_disk() {
        let path = std::env::temp_dir().join(format!("palm-model-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"intercept": "0", "coefficients": ["1"]}"#).unwrap();
        let model = LinearModel::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(model.predict(&[dec!(7.25)]).unwrap(), dec!(7.25));
    }
}
