//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::ScorerSpec;
use crate::export::{INVALID_SHEET_CHARS, MAX_SHEET_NAME_LEN};

/// Validate a scorer specification
///
/// Checks:
/// - A model path is set (existence is checked when assets load)
/// - The sheet name is usable by spreadsheet applications
/// - Export column names are non-empty and distinct
pub fn validate_config(spec: &ScorerSpec) -> Result<(), ValidationError> {
    if spec.assets.model.as_os_str().is_empty() {
        return Err(ValidationError::MissingModelPath);
    }

    let sheet = &spec.export.sheet_name;
    if sheet.trim().is_empty() {
        return Err(ValidationError::EmptySheetName);
    }
    let len = sheet.chars().count();
    if len > MAX_SHEET_NAME_LEN {
        return Err(ValidationError::SheetNameTooLong(sheet.clone(), len));
    }
    if let Some(c) = sheet.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
        return Err(ValidationError::InvalidSheetChar(sheet.clone(), c));
    }

    if spec.export.label_column.trim().is_empty() {
        return Err(ValidationError::EmptyColumnName("labels"));
    }
    if spec.export.probability_column.trim().is_empty() {
        return Err(ValidationError::EmptyColumnName("probabilities"));
    }
    if spec.export.label_column == spec.export.probability_column {
        return Err(ValidationError::DuplicateOutputColumn(
            spec.export.label_column.clone(),
        ));
    }

    Ok(())
}
