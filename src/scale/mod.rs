//! Pre-fitted feature scalers and the degrade-gracefully scaling step.
//!
//! A scaler failure never aborts scoring. [`try_scale`] returns an explicit
//! `Result`; [`scale`] matches on it and falls back to the unscaled matrix,
//! keeping the [`ScalingError`] so the caller can surface it as a warning.

mod artifact;
mod minmax;
mod standard;

pub use artifact::ScalerArtifact;
pub use minmax::MinMaxScaler;
pub use standard::StandardScaler;

use crate::align::AlignedMatrix;
use ndarray::{Array2, ArrayView2};
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// Why a transform could not be applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalingError {
    /// Column count differs from the fitted width.
    #[error("scaler was fitted on {expected} features, input has {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Fitted feature names differ from the input columns.
    #[error("scaler feature '{expected}' at position {position} does not match input column '{actual}'")]
    FeatureMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    /// NaN or infinite input value.
    #[error("non-finite value at row {row}, column '{column}'")]
    NonFinite { row: usize, column: String },
}

/// A fitted per-column transform.
pub trait Scaler: Send + Sync + fmt::Debug {
    /// Short scaler kind, e.g. `standard`.
    fn name(&self) -> &'static str;

    /// Number of columns the scaler was fitted on.
    fn n_features(&self) -> usize;

    /// Column names seen at fit time, if recorded.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Apply the transform to an input of the fitted width.
    fn transform(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, ScalingError>;
}

/// Result of the scaling step.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleOutcome {
    /// Transform applied
    Scaled(AlignedMatrix),
    /// Input passed through; `failure` is set when a scaler was present but failed
    Unscaled {
        matrix: AlignedMatrix,
        failure: Option<ScalingError>,
    },
}

impl ScaleOutcome {
    pub fn matrix(&self) -> &AlignedMatrix {
        match self {
            Self::Scaled(m) | Self::Unscaled { matrix: m, .. } => m,
        }
    }

    pub fn into_matrix(self) -> AlignedMatrix {
        match self {
            Self::Scaled(m) | Self::Unscaled { matrix: m, .. } => m,
        }
    }

    pub fn failure(&self) -> Option<&ScalingError> {
        match self {
            Self::Unscaled { failure, .. } => failure.as_ref(),
            Self::Scaled(_) => None,
        }
    }

    pub fn is_scaled(&self) -> bool {
        matches!(self, Self::Scaled(_))
    }
}

/// Apply `scaler`, checking width, recorded names and finiteness first.
pub fn try_scale(matrix: &AlignedMatrix, scaler: &dyn Scaler) -> Result<AlignedMatrix, ScalingError> {
    if matrix.n_cols() != scaler.n_features() {
        return Err(ScalingError::ShapeMismatch {
            expected: scaler.n_features(),
            actual: matrix.n_cols(),
        });
    }

    if let Some(names) = scaler.feature_names() {
        for (position, (expected, actual)) in names.iter().zip(matrix.columns()).enumerate() {
            if expected != actual {
                return Err(ScalingError::FeatureMismatch {
                    position,
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
        }
    }

    for ((row, col), value) in matrix.values().indexed_iter() {
        if !value.is_finite() {
            return Err(ScalingError::NonFinite {
                row,
                column: matrix.columns()[col].clone(),
            });
        }
    }

    let scaled = scaler.transform(matrix.view())?;
    Ok(matrix.with_values(scaled))
}

/// Scale if possible, otherwise fall back to the input unchanged.
pub fn scale(matrix: AlignedMatrix, scaler: Option<&dyn Scaler>) -> ScaleOutcome {
    let Some(scaler) = scaler else {
        return ScaleOutcome::Unscaled {
            matrix,
            failure: None,
        };
    };

    match try_scale(&matrix, scaler) {
        Ok(scaled) => ScaleOutcome::Scaled(scaled),
        Err(failure) => {
            warn!(scaler = scaler.name(), error = %failure, "scaling failed, scoring unscaled input");
            ScaleOutcome::Unscaled {
                matrix,
                failure: Some(failure),
            }
        }
    }
}

/// Width check shared by the scaler implementations.
pub(crate) fn check_width(x: &ArrayView2<'_, f64>, n_features: usize) -> Result<(), ScalingError> {
    if x.ncols() != n_features {
        return Err(ScalingError::ShapeMismatch {
            expected: n_features,
            actual: x.ncols(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
