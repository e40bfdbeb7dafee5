//! Serialized scaler artifacts tagged by `kind`

use super::{MinMaxScaler, Scaler, StandardScaler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// On-disk scaler representation.
///
/// ```json
/// { "kind": "standard", "mean": [10.0, 3.0], "scale": [2.0, 1.5] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

impl ScalerArtifact {
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Standard(s) => s.validate(),
            Self::MinMax(s) => s.validate(),
        }
    }

    pub fn into_scaler(self) -> Arc<dyn Scaler> {
        match self {
            Self::Standard(s) => Arc::new(s),
            Self::MinMax(s) => Arc::new(s),
        }
    }
}
