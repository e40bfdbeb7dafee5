//! Error types with actionable diagnostics.
//!
//! Every failure is caught at the boundary of the scoring operation it
//! originates in and rendered as a human-readable message. Nothing here
//! terminates a session: the worst case is a refused request.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::PredictionError;

/// Result type alias for puntuar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of artifact an asset error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Fitted classifier
    Model,
    /// Fitted feature scaler
    Scaler,
    /// Feature-name sidecar (JSON array of strings)
    Schema,
    /// Uploaded tabular dataset
    Dataset,
}

impl AssetKind {
    /// CLI flag that overrides the path of this asset.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Model => "--model",
            Self::Scaler => "--scaler",
            Self::Schema => "--schema",
            Self::Dataset => "<INPUT>",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Scaler => write!(f, "scaler"),
            Self::Schema => write!(f, "schema"),
            Self::Dataset => write!(f, "dataset"),
        }
    }
}

/// Errors surfaced by the scoring adapter.
#[derive(Error, Debug)]
pub enum Error {
    /// Model, scaler, schema or dataset artifact missing or unloadable.
    #[error("{asset} artifact unavailable: {path}\n  Cause: {reason}\n  → Check the path or pass {flag}", flag = asset.flag())]
    AssetUnavailable {
        asset: AssetKind,
        path: PathBuf,
        reason: String,
    },

    /// No feature-name source while a scaler needs a known column order.
    #[error("No feature schema available for scaled scoring\n  → Provide --schema, use a model that records its feature names, or enable the default schema")]
    SchemaUnavailable,

    /// Declared or recorded feature names do not form a valid schema.
    #[error("Invalid feature schema: {message}")]
    InvalidSchema { message: String },

    /// Prediction requested before a model was loaded.
    #[error("No model loaded\n  → Load a model artifact before requesting a prediction")]
    ModelUnavailable,

    /// Classifier failed during label or probability inference.
    #[error("Prediction failed: {0}")]
    PredictionFailed(#[from] PredictionError),

    /// User-entered value or uploaded cell rejected.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// Configuration file could not be read, parsed or validated.
    #[error("Invalid configuration in {path}: {message}\n  → Check YAML syntax and field values")]
    Config { path: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Batch result export failed.
    #[error("Export failed: {message}")]
    Export { message: String },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an asset error.
    pub fn asset(asset: AssetKind, path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self::AssetUnavailable {
            asset,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an input error for a named field.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the user can fix this by changing input, paths or configuration.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::AssetUnavailable { .. }
                | Self::SchemaUnavailable
                | Self::InvalidSchema { .. }
                | Self::ModelUnavailable
                | Self::InvalidInput { .. }
                | Self::Config { .. }
        )
    }

    /// Stable error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AssetUnavailable { .. } => "E001",
            Self::SchemaUnavailable => "E010",
            Self::InvalidSchema { .. } => "E011",
            Self::ModelUnavailable => "E020",
            Self::PredictionFailed(_) => "E021",
            Self::InvalidInput { .. } => "E030",
            Self::Config { .. } => "E040",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
            Self::Export { .. } => "E060",
        }
    }
}
