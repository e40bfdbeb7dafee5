//! YAML schema for the scorer configuration file

use crate::export::ExportOptions;
use crate::scoring::ScoringOptions;
use crate::schema::FeatureSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" | "yes" => Ok(true),
            "false" | "no" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

fn default_true() -> bool {
    true
}

/// Complete scorer specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorerSpec {
    /// Artifact locations
    #[serde(default)]
    pub assets: AssetPaths,

    /// Schema resolution settings
    #[serde(default)]
    pub schema: SchemaSettings,

    /// Batch export settings
    #[serde(default)]
    pub export: ExportSettings,
}

impl ScorerSpec {
    /// Scoring options implied by the schema settings.
    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            fallback_schema: self.schema.fallback(),
        }
    }

    pub fn export_options(&self) -> ExportOptions {
        self.export.clone().into()
    }

    /// Resolve relative asset paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() && !p.as_os_str().is_empty() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.assets.model);
        if let Some(p) = self.assets.scaler.as_mut() {
            resolve(p);
        }
        if let Some(p) = self.assets.schema.as_mut() {
            resolve(p);
        }
    }
}

/// Model, scaler and schema artifact paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetPaths {
    /// Fitted classifier (JSON or YAML)
    #[serde(default)]
    pub model: PathBuf,

    /// Optional fitted scaler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<PathBuf>,

    /// Optional feature-name sidecar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,
}

/// Schema resolution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSettings {
    /// Fall back to the built-in five-feature schema
    #[serde(default = "default_true", deserialize_with = "deserialize_bool_lenient")]
    pub use_default: bool,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self { use_default: true }
    }
}

impl SchemaSettings {
    /// The fallback schema, if enabled.
    pub fn fallback(&self) -> Option<FeatureSchema> {
        self.use_default.then(FeatureSchema::credit_default)
    }
}

/// Batch export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    #[serde(default = "default_label_column")]
    pub label_column: String,

    #[serde(default = "default_probability_column")]
    pub probability_column: String,
}

fn default_sheet_name() -> String {
    "Predictions".to_string()
}

fn default_label_column() -> String {
    "Prediction".to_string()
}

fn default_probability_column() -> String {
    "Probability".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            sheet_name: default_sheet_name(),
            label_column: default_label_column(),
            probability_column: default_probability_column(),
        }
    }
}

impl From<ExportSettings> for ExportOptions {
    fn from(settings: ExportSettings) -> Self {
        Self {
            sheet_name: settings.sheet_name,
            label_column: settings.label_column,
            probability_column: settings.probability_column,
        }
    }
}
