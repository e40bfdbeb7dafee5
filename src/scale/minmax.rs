//! Min-max scaling into a target range

use super::{check_width, Scaler, ScalingError};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

fn default_range() -> (f64, f64) {
    (0.0, 1.0)
}

/// Fitted min-max scaler mapping `[data_min, data_max]` onto `feature_range`.
///
/// Columns with zero range map to the lower bound of `feature_range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub data_min: Vec<f64>,
    pub data_max: Vec<f64>,
    #[serde(default = "default_range")]
    pub feature_range: (f64, f64),
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl MinMaxScaler {
    pub fn new(data_min: Vec<f64>, data_max: Vec<f64>) -> Self {
        Self {
            data_min,
            data_max,
            feature_range: default_range(),
            feature_names: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.data_min.is_empty() {
            return Err("min-max scaler has no features".to_string());
        }
        if self.data_min.len() != self.data_max.len() {
            return Err(format!(
                "data_min has {} entries, data_max has {}",
                self.data_min.len(),
                self.data_max.len()
            ));
        }
        for (i, (lo, hi)) in self.data_min.iter().zip(&self.data_max).enumerate() {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(format!("feature {i} has an invalid range [{lo}, {hi}]"));
            }
        }
        let (lo, hi) = self.feature_range;
        if lo.partial_cmp(&hi) != Some(std::cmp::Ordering::Less) {
            return Err(format!("feature_range ({lo}, {hi}) must be increasing"));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.data_min.len() {
                return Err(format!(
                    "{} feature names recorded for {} features",
                    names.len(),
                    self.data_min.len()
                ));
            }
        }
        Ok(())
    }
}

impl Scaler for MinMaxScaler {
    fn name(&self) -> &'static str {
        "min_max"
    }

    fn n_features(&self) -> usize {
        self.data_min.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn transform(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, ScalingError> {
        check_width(&x, self.n_features())?;
        let (lo, hi) = self.feature_range;
        let mut out = x.to_owned();
        for (col, mut column) in out.columns_mut().into_iter().enumerate() {
            let min = self.data_min[col];
            let range = self.data_max[col] - min;
            column.mapv_inplace(|v| {
                if range > 0.0 {
                    lo + (v - min) / range * (hi - lo)
                } else {
                    lo
                }
            });
        }
        Ok(out)
    }
}
