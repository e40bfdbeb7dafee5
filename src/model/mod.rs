//! Fitted classifiers and their capability interface.
//!
//! Models are consumed, never trained, here. Every model predicts labels;
//! probability estimates, importance weights and recorded feature names are
//! optional capabilities with "unsupported" defaults. [`Capabilities`] is
//! resolved once when an asset bundle is built.
//!
//! ## Model kinds
//!
//! - [`LogisticRegression`]: labels and probabilities
//! - [`RandomForest`]: labels, probabilities and importance weights
//! - [`LinearSvc`]: labels only

mod artifact;
mod forest;
mod logistic;
mod svc;


pub use artifact::ModelArtifact;
pub use forest::{DecisionTree, RandomForest, TreeNode};
pub use logistic::LogisticRegression;
pub use svc::LinearSvc;

use crate::schema::FeatureSchema;
use ndarray::{Array1, Array2, ArrayView2};
use std::fmt;
use thiserror::Error;

/// Class labels used when an artifact does not list its own.
pub const DEFAULT_CLASSES: [i64; 2] = [0, 1];

/// Errors raised by a classifier during inference.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// Input column count differs from what the model was fitted on.
    #[error("model expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// NaN or infinite input.
    #[error("non-finite input at row {row}, column {column}")]
    NonFinite { row: usize, column: usize },

    /// Capability the model does not have.
    #[error("model does not support {0}")]
    Unsupported(&'static str),

    /// Model internals inconsistent at inference time.
    #[error("malformed model: {0}")]
    Malformed(String),
}

/// A fitted binary classifier.
pub trait Classifier: Send + Sync + fmt::Debug {
    /// Short model kind, e.g. `random_forest`.
    fn name(&self) -> &'static str;

    /// Number of input features the model was fitted on.
    fn n_features(&self) -> usize;

    /// Predict one class label per row.
    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<i64>, PredictionError>;

    /// Whether [`Classifier::predict_proba`] is implemented.
    fn supports_probability(&self) -> bool {
        false
    }

    /// Class probabilities, one row per input row, one column per class.
    fn predict_proba(&self, _x: ArrayView2<'_, f64>) -> Result<Array2<f64>, PredictionError> {
        Err(PredictionError::Unsupported("probability estimates"))
    }

    /// Per-feature importance weights in training column order.
    fn feature_importances(&self) -> Option<&[f64]> {
        None
    }

    /// Feature names recorded at training time.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }
}

/// Optional capabilities of a loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Positive-class probability available
    pub probability: bool,
    /// Importance weights available
    pub importances: bool,
}

impl Capabilities {
    /// Probe a model once.
    pub fn of(model: &dyn Classifier) -> Self {
        Self {
            probability: model.supports_probability(),
            importances: model.feature_importances().is_some(),
        }
    }

    /// Short description, e.g. `label+probability+importances`.
    pub fn describe(&self) -> String {
        let mut parts = vec!["label"];
        if self.probability {
            parts.push("probability");
        }
        if self.importances {
            parts.push("importances");
        }
        parts.join("+")
    }
}

/// Reject inputs of the wrong width or with non-finite values.
pub(crate) fn check_input(x: &ArrayView2<'_, f64>, n_features: usize) -> Result<(), PredictionError> {
    if x.ncols() != n_features {
        return Err(PredictionError::ShapeMismatch {
            expected: n_features,
            actual: x.ncols(),
        });
    }
    for ((row, column), value) in x.indexed_iter() {
        if !value.is_finite() {
            return Err(PredictionError::NonFinite { row, column });
        }
    }
    Ok(())
}

/// Shared artifact checks for the class list.
pub(crate) fn validate_classes(classes: &[i64]) -> Result<(), String> {
    if classes.len() != 2 {
        return Err(format!(
            "binary classifier needs exactly 2 classes, got {}",
            classes.len()
        ));
    }
    if classes[0] == classes[1] {
        return Err("class labels must differ".to_string());
    }
    Ok(())
}

/// Shared artifact checks for recorded feature names.
pub(crate) fn validate_feature_names(
    names: Option<&[String]>,
    n_features: usize,
) -> Result<(), String> {
    let Some(names) = names.filter(|n| !n.is_empty()) else {
        return Ok(());
    };
    if names.len() != n_features {
        return Err(format!(
            "{} feature names recorded for {} features",
            names.len(),
            n_features
        ));
    }
    FeatureSchema::new(names.iter().cloned())
        .map(|_| ())
        .map_err(|e| format!("recorded feature names: {e}"))
}

pub(crate) fn default_classes() -> Vec<i64> {
    DEFAULT_CLASSES.to_vec()
}
