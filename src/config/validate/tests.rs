//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use std::path::PathBuf;

fn create_valid_spec() -> ScorerSpec {
    ScorerSpec {
        assets: AssetPaths {
            model: PathBuf::from("model.json"),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_valid_config() {
    assert!(validate_config(&create_valid_spec()).is_ok());
}

#[test]
fn test_missing_model_path() {
    let spec = ScorerSpec::default();
    assert_eq!(validate_config(&spec), Err(ValidationError::MissingModelPath));
}

#[test]
fn test_empty_sheet_name() {
    let mut spec = create_valid_spec();
    spec.export.sheet_name = "  ".to_string();
    assert_eq!(validate_config(&spec), Err(ValidationError::EmptySheetName));
}

#[test]
fn test_sheet_name_too_long() {
    let mut spec = create_valid_spec();
    spec.export.sheet_name = "x".repeat(32);
    let err = validate_config(&spec).unwrap_err();
    assert!(matches!(err, ValidationError::SheetNameTooLong(_, 32)));

    spec.export.sheet_name = "x".repeat(31);
    assert!(validate_config(&spec).is_ok());
}

#[test]
fn test_sheet_name_invalid_char() {
    let mut spec = create_valid_spec();
    spec.export.sheet_name = "Q1/Q2".to_string();
    let err = validate_config(&spec).unwrap_err();
    assert_eq!(err, ValidationError::InvalidSheetChar("Q1/Q2".to_string(), '/'));
}

#[test]
fn test_duplicate_output_columns() {
    let mut spec = create_valid_spec();
    spec.export.probability_column = "Prediction".to_string();
    let err = validate_config(&spec).unwrap_err();
    assert!(err.to_string().contains("'Prediction'"));
}

#[test]
fn test_empty_label_column() {
    let mut spec = create_valid_spec();
    spec.export.label_column = String::new();
    assert_eq!(
        validate_config(&spec),
        Err(ValidationError::EmptyColumnName("labels"))
    );
}
