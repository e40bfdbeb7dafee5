//! Feature-importance ranking and a text bar chart for terminals

use crate::model::Classifier;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::warn;

/// One feature's weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub weight: f64,
}

/// Pair the model's importance weights positionally with `names` and sort by
/// weight, largest first. Ties keep column order.
///
/// Returns an empty list when the model has no weights, or when the weight
/// count does not match the number of names.
pub fn rank_importances(model: &dyn Classifier, names: &[String]) -> Vec<FeatureImportance> {
    let Some(weights) = model.feature_importances() else {
        return Vec::new();
    };
    if weights.len() != names.len() {
        warn!(
            weights = weights.len(),
            features = names.len(),
            "importance weights do not match schema, omitting"
        );
        return Vec::new();
    }

    let mut ranked: Vec<FeatureImportance> = names
        .iter()
        .zip(weights)
        .map(|(feature, &weight)| FeatureImportance {
            feature: feature.clone(),
            weight,
        })
        .collect();
    ranked.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    ranked
}

/// Render a horizontal bar chart, one line per feature, bars scaled to the
/// largest weight.
pub fn render_bars(importances: &[FeatureImportance], width: usize) -> String {
    let label_width = importances
        .iter()
        .map(|i| i.feature.chars().count())
        .max()
        .unwrap_or(0);
    let max = importances
        .iter()
        .map(|i| i.weight)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for item in importances {
        let len = if max > 0.0 && item.weight > 0.0 {
            ((item.weight / max) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<label_width$} | {:<width$} {:.4}\n",
            item.feature,
            "█".repeat(len),
            item.weight,
        ));
    }
    out
}
