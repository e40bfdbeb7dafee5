//! Scoring: schema resolution, alignment, scaling and inference in one pass.
//!
//! [`ScoringAdapter`] runs the full pipeline against an [`AssetBundle`]:
//!
//! 1. resolve the feature schema (declared > model-recorded > default)
//! 2. align the input to it, zero-filling missing features
//! 3. scale, falling back to the unscaled matrix on failure
//! 4. predict labels and, when supported, positive-class probabilities
//!
//! Class index 1 is the positive ("high risk") class throughout.
//!
//! [`AssetBundle`]: crate::assets::AssetBundle

mod adapter;
mod batch;
mod result;

#[cfg(test)]
mod tests;

pub use adapter::{ScoringAdapter, ScoringOptions};
pub use batch::BatchReport;
pub use result::{ScoringResult, ScoringWarning};

use crate::align::AlignedMatrix;
use crate::error::Result;
use crate::model::{Capabilities, Classifier, PredictionError};
use serde::Serialize;
use std::fmt;

/// Label value reported as high risk.
pub const POSITIVE_LABEL: i64 = 1;

/// Column of `predict_proba` holding the positive-class probability.
pub const POSITIVE_CLASS_INDEX: usize = 1;

/// Risk classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    High,
    Low,
}

impl RiskLabel {
    /// Map a predicted class label.
    pub fn from_label(label: i64) -> Self {
        if label == POSITIVE_LABEL {
            Self::High
        } else {
            Self::Low
        }
    }

    pub fn is_high(self) -> bool {
        self == Self::High
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High risk"),
            Self::Low => write!(f, "Low risk"),
        }
    }
}

/// Render a probability as a percentage with two decimals: `0.82` → `82.00%`.
pub fn format_probability(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}

/// Prediction for one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowScore {
    /// Raw predicted class label
    pub label: i64,
    pub risk: RiskLabel,
    /// Positive-class probability, absent for label-only models
    pub probability: Option<f64>,
}

/// Predict every row of an aligned (and possibly scaled) matrix.
///
/// Probabilities are requested only when `capabilities.probability` is set.
pub fn score(
    matrix: &AlignedMatrix,
    model: &dyn Classifier,
    capabilities: Capabilities,
) -> Result<Vec<RowScore>> {
    let labels = model.predict(matrix.view())?;

    let probabilities = if capabilities.probability {
        let proba = model.predict_proba(matrix.view())?;
        if proba.nrows() != labels.len() || proba.ncols() <= POSITIVE_CLASS_INDEX {
            return Err(PredictionError::Malformed(format!(
                "probability matrix has shape {}x{}, expected {}x2",
                proba.nrows(),
                proba.ncols(),
                labels.len()
            ))
            .into());
        }
        Some(proba.column(POSITIVE_CLASS_INDEX).to_vec())
    } else {
        None
    };

    Ok(labels
        .iter()
        .enumerate()
        .map(|(row, &label)| RowScore {
            label,
            risk: RiskLabel::from_label(label),
            probability: probabilities.as_ref().map(|p| p[row]),
        })
        .collect())
}
