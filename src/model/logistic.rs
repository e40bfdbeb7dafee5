//! Binary logistic regression

use super::{check_input, default_classes, validate_classes, validate_feature_names};
use super::{Classifier, PredictionError};
use ndarray::{Array1, Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Fitted logistic regression: `p(positive) = sigmoid(w·x + b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One coefficient per feature
    pub coefficients: Vec<f64>,
    /// Intercept term
    #[serde(default)]
    pub intercept: f64,
    /// Class labels; index 1 is the positive class
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
    /// Feature names recorded at training time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl LogisticRegression {
    /// Create a model with default classes `[0, 1]`.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            classes: default_classes(),
            feature_names: None,
        }
    }

    /// Record training-time feature names.
    pub fn with_feature_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Check internal consistency after deserialization.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("logistic regression has no coefficients".to_string());
        }
        if !self.coefficients.iter().all(|c| c.is_finite()) || !self.intercept.is_finite() {
            return Err("logistic regression parameters must be finite".to_string());
        }
        validate_classes(&self.classes)?;
        validate_feature_names(self.feature_names.as_deref(), self.coefficients.len())
    }

    /// Raw decision value `w·x + b` per row.
    pub fn decision_function(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictionError> {
        check_input(&x, self.n_features())?;
        let w = Array1::from(self.coefficients.clone());
        Ok(x.dot(&w) + self.intercept)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticRegression {
    fn name(&self) -> &'static str {
        "logistic_regression"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<i64>, PredictionError> {
        let decision = self.decision_function(x)?;
        Ok(decision.mapv(|d| if d > 0.0 { self.classes[1] } else { self.classes[0] }))
    }

    fn supports_probability(&self) -> bool {
        true
    }

    fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, PredictionError> {
        let decision = self.decision_function(x)?;
        let mut proba = Array2::zeros((decision.len(), 2));
        for (row, d) in decision.iter().enumerate() {
            let p = sigmoid(*d);
            proba[[row, 0]] = 1.0 - p;
            proba[[row, 1]] = p;
        }
        Ok(proba)
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
