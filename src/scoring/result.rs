//! Single-record scoring result

use super::{format_probability, RiskLabel};
use crate::align::AlignmentReport;
use crate::importance::FeatureImportance;
use crate::scale::ScalingError;
use crate::schema::SchemaSource;
use serde::Serialize;
use std::fmt;

/// Non-fatal conditions raised while scoring.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringWarning {
    /// The scaler could not be applied; unscaled values were scored.
    ScalingFailed(ScalingError),
    /// No declared or model-recorded names; the default schema was used.
    DefaultSchema,
    /// No schema at all; the input's own column order was scored.
    Passthrough,
}

impl fmt::Display for ScoringWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScalingFailed(e) => write!(f, "scaling failed, scored unscaled input: {e}"),
            Self::DefaultSchema => write!(f, "no feature names declared, using the default schema"),
            Self::Passthrough => write!(f, "no feature schema, scoring columns in input order"),
        }
    }
}

impl Serialize for ScoringWarning {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything reported for one scored record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    /// Raw predicted class label
    pub label: i64,
    pub risk: RiskLabel,
    /// Positive-class probability, absent for label-only models
    pub probability: Option<f64>,
    /// Ranked importances; empty when the model exposes none
    pub importances: Vec<FeatureImportance>,
    pub warnings: Vec<ScoringWarning>,
    #[serde(skip)]
    pub alignment: AlignmentReport,
    #[serde(serialize_with = "serialize_source")]
    pub schema_source: Option<SchemaSource>,
}

impl ScoringResult {
    /// Probability as a percentage, or `n/a`.
    pub fn probability_text(&self) -> String {
        self.probability
            .map(format_probability)
            .unwrap_or_else(|| "n/a".to_string())
    }

    /// One-line summary, e.g. `High risk (82.00%)`.
    pub fn summary(&self) -> String {
        match self.probability {
            Some(p) => format!("{} ({})", self.risk, format_probability(p)),
            None => self.risk.to_string(),
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk.is_high()
    }
}

fn serialize_source<S: serde::Serializer>(
    source: &Option<SchemaSource>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match source {
        Some(source) => serializer.collect_str(source),
        None => serializer.serialize_str("input"),
    }
}
