//! Validation error types

/// Validation error type
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No model path configured (set assets.model or pass --model)")]
    MissingModelPath,

    #[error("Sheet name must not be empty")]
    EmptySheetName,

    #[error("Sheet name '{0}' is {1} characters long (maximum 31)")]
    SheetNameTooLong(String, usize),

    #[error("Sheet name '{0}' contains '{1}' (not allowed: [ ] : * ? / \\)")]
    InvalidSheetChar(String, char),

    #[error("Export column name for {0} must not be empty")]
    EmptyColumnName(&'static str),

    #[error("Label and probability columns are both named '{0}'")]
    DuplicateOutputColumn(String),
}
