//! Linear support-vector classifier (label only)

use super::{check_input, default_classes, validate_classes, validate_feature_names};
use super::{Classifier, PredictionError};
use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};

/// Fitted linear SVC. Predicts the positive class when `w·x + b > 0`.
///
/// Has no probability estimates, so scoring reports probability as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSvc {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl LinearSvc {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            classes: default_classes(),
            feature_names: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("linear SVC has no coefficients".to_string());
        }
        if !self.coefficients.iter().all(|c| c.is_finite()) || !self.intercept.is_finite() {
            return Err("linear SVC parameters must be finite".to_string());
        }
        validate_classes(&self.classes)?;
        validate_feature_names(self.feature_names.as_deref(), self.coefficients.len())
    }
}

impl Classifier for LinearSvc {
    fn name(&self) -> &'static str {
        "linear_svc"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<i64>, PredictionError> {
        check_input(&x, self.n_features())?;
        let w = Array1::from(self.coefficients.clone());
        let decision = x.dot(&w) + self.intercept;
        Ok(decision.mapv(|d| if d > 0.0 { self.classes[1] } else { self.classes[0] }))
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
