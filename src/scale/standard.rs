//! Standardization: `x' = (x - mean) / scale`

use super::{check_width, Scaler, ScalingError};
use ndarray::{Array1, Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Fitted standard scaler.
///
/// A zero (or negative, or non-finite) `scale` entry is treated as `1.0`, so
/// a constant training column is centred but not divided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self {
            mean,
            scale,
            feature_names: None,
        }
    }

    pub fn with_feature_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.mean.is_empty() {
            return Err("standard scaler has no features".to_string());
        }
        if self.mean.len() != self.scale.len() {
            return Err(format!(
                "mean has {} entries, scale has {}",
                self.mean.len(),
                self.scale.len()
            ));
        }
        if !self.mean.iter().all(|m| m.is_finite()) {
            return Err("standard scaler mean must be finite".to_string());
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.mean.len() {
                return Err(format!(
                    "{} feature names recorded for {} features",
                    names.len(),
                    self.mean.len()
                ));
            }
        }
        Ok(())
    }

    fn effective_scale(&self) -> Array1<f64> {
        self.scale
            .iter()
            .map(|&s| if s.is_finite() && s > 0.0 { s } else { 1.0 })
            .collect()
    }
}

impl Scaler for StandardScaler {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn transform(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, ScalingError> {
        check_width(&x, self.n_features())?;
        let mean = Array1::from(self.mean.clone());
        Ok((&x - &mean) / &self.effective_scale())
    }
}
