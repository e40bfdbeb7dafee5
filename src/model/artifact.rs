//! Serialized model artifacts tagged by `kind`

use super::{Classifier, LinearSvc, LogisticRegression, RandomForest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// On-disk model representation.
///
/// ```json
/// { "kind": "logistic_regression", "coefficients": [0.4, 0.1], "intercept": -1.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
    RandomForest(RandomForest),
    LinearSvc(LinearSvc),
}

impl ModelArtifact {
    /// Check internal consistency after deserialization.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::LogisticRegression(m) => m.validate(),
            Self::RandomForest(m) => m.validate(),
            Self::LinearSvc(m) => m.validate(),
        }
    }

    /// Convert into a shareable classifier.
    pub fn into_classifier(self) -> Arc<dyn Classifier> {
        match self {
            Self::LogisticRegression(m) => Arc::new(m),
            Self::RandomForest(m) => Arc::new(m),
            Self::LinearSvc(m) => Arc::new(m),
        }
    }
}
