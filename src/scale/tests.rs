//! Unit tests for scalers and the fallback step

use super::*;
use crate::align::AlignedMatrix;
use approx::assert_abs_diff_eq;
use ndarray::array;

fn assert_close(actual: &Array2<f64>, expected: &Array2<f64>) {
    assert_eq!(actual.dim(), expected.dim());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-12);
    }
}

fn matrix(columns: &[&str], values: Array2<f64>) -> AlignedMatrix {
    AlignedMatrix::new(columns.iter().map(|s| (*s).to_string()).collect(), values)
}

/// Scaler that always fails, standing in for a broken artifact.
#[derive(Debug)]
struct BrokenScaler;

impl Scaler for BrokenScaler {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn n_features(&self) -> usize {
        2
    }

    fn transform(&self, _x: ArrayView2<'_, f64>) -> Result<Array2<f64>, ScalingError> {
        Err(ScalingError::ShapeMismatch {
            expected: 7,
            actual: 2,
        })
    }
}

#[test]
fn test_standard_scaler_math() {
    let scaler = StandardScaler::new(vec![10.0, 2.0], vec![5.0, 0.5]);
    let out = scaler.transform(array![[20.0, 1.0], [10.0, 3.0]].view()).unwrap();
    assert_close(&out, &array![[2.0, -2.0], [0.0, 2.0]]);
}

#[test]
fn test_standard_scaler_zero_scale_only_centres() {
    let scaler = StandardScaler::new(vec![3.0], vec![0.0]);
    let out = scaler.transform(array![[5.0]].view()).unwrap();
    assert_abs_diff_eq!(out[[0, 0]], 2.0, epsilon = 1e-12);
}

#[test]
fn test_minmax_scaler_math() {
    let scaler = MinMaxScaler::new(vec![0.0, 10.0], vec![100.0, 10.0]);
    let out = scaler.transform(array![[25.0, 10.0], [150.0, 99.0]].view()).unwrap();
    assert_close(&out, &array![[0.25, 0.0], [1.5, 0.0]]);
}

#[test]
fn test_minmax_custom_range() {
    let mut scaler = MinMaxScaler::new(vec![0.0], vec![10.0]);
    scaler.feature_range = (-1.0, 1.0);
    let out = scaler.transform(array![[5.0]].view()).unwrap();
    assert_abs_diff_eq!(out[[0, 0]], 0.0, epsilon = 1e-12);
}

#[test]
fn test_scale_without_scaler_is_identity() {
    let input = matrix(&["a", "b"], array![[1.0, 2.0]]);
    let outcome = scale(input.clone(), None);
    assert!(!outcome.is_scaled());
    assert!(outcome.failure().is_none());
    assert_eq!(outcome.matrix(), &input);
}

#[test]
fn test_scale_failure_falls_back_unchanged() {
    let input = matrix(&["a", "b"], array![[1.0, 2.0]]);
    let outcome = scale(input.clone(), Some(&BrokenScaler));
    assert!(!outcome.is_scaled());
    assert!(matches!(
        outcome.failure(),
        Some(ScalingError::ShapeMismatch { expected: 7, .. })
    ));
    assert_eq!(outcome.into_matrix(), input);
}

#[test]
fn test_width_mismatch_falls_back() {
    let scaler = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]);
    let input = matrix(&["a", "b"], array![[1.0, 2.0]]);
    let outcome = scale(input.clone(), Some(&scaler));
    assert_eq!(
        outcome.failure(),
        Some(&ScalingError::ShapeMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(outcome.matrix(), &input);
}

#[test]
fn test_recorded_names_must_match_columns() {
    let scaler = StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0]).with_feature_names(["a", "c"]);
    let input = matrix(&["a", "b"], array![[1.0, 2.0]]);
    let err = try_scale(&input, &scaler).unwrap_err();
    assert_eq!(
        err,
        ScalingError::FeatureMismatch {
            position: 1,
            expected: "c".into(),
            actual: "b".into()
        }
    );
}

#[test]
fn test_non_finite_input_is_a_scaling_error() {
    let scaler = StandardScaler::new(vec![0.0], vec![1.0]);
    let input = matrix(&["a"], array![[f64::INFINITY]]);
    assert!(matches!(
        try_scale(&input, &scaler),
        Err(ScalingError::NonFinite { row: 0, .. })
    ));
}

#[test]
fn test_successful_scale_keeps_columns() {
    let scaler = StandardScaler::new(vec![1.0, 1.0], vec![1.0, 1.0]);
    let input = matrix(&["a", "b"], array![[1.0, 3.0]]);
    let outcome = scale(input, Some(&scaler));
    assert!(outcome.is_scaled());
    assert_eq!(outcome.matrix().columns(), &["a", "b"]);
    assert_eq!(outcome.matrix().row(0).to_vec(), vec![0.0, 2.0]);
}

#[test]
fn test_artifact_validation() {
    let artifact: ScalerArtifact =
        serde_json::from_str(r#"{"kind":"standard","mean":[1.0,2.0],"scale":[1.0]}"#).unwrap();
    assert!(artifact.validate().is_err());

    let artifact: ScalerArtifact = serde_json::from_str(
        r#"{"kind":"min_max","data_min":[0.0],"data_max":[4.0],"feature_range":[0.0,2.0]}"#,
    )
    .unwrap();
    artifact.validate().unwrap();
    let scaler = artifact.into_scaler();
    assert_eq!(scaler.name(), "min_max");
    let out = scaler.transform(array![[1.0]].view()).unwrap();
    assert_abs_diff_eq!(out[[0, 0]], 0.5, epsilon = 1e-12);
}

#[test]
fn test_inverted_minmax_range_rejected() {
    let scaler = MinMaxScaler::new(vec![5.0], vec![1.0]);
    assert!(scaler.validate().is_err());
}
