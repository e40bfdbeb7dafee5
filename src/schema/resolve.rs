//! Schema resolution with declared > model-recorded > default precedence

use super::FeatureSchema;
use crate::error::{Error, Result};
use crate::model::Classifier;
use std::fmt;
use tracing::debug;

/// Where a resolved schema came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSource {
    /// Explicit sidecar declaration
    Declared,
    /// Names recorded on the fitted model
    Model,
    /// Built-in fallback
    Default,
}

impl fmt::Display for SchemaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared => write!(f, "declared"),
            Self::Model => write!(f, "model"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Outcome of schema resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedSchema {
    /// A known column order to align against
    Known {
        schema: FeatureSchema,
        source: SchemaSource,
    },
    /// No source available and none needed: use the input's natural order
    Passthrough,
}

impl ResolvedSchema {
    /// The schema, if one was resolved.
    pub fn schema(&self) -> Option<&FeatureSchema> {
        match self {
            Self::Known { schema, .. } => Some(schema),
            Self::Passthrough => None,
        }
    }

    /// The source, if a schema was resolved.
    pub fn source(&self) -> Option<SchemaSource> {
        match self {
            Self::Known { source, .. } => Some(*source),
            Self::Passthrough => None,
        }
    }
}

/// Determine the authoritative feature schema.
///
/// Precedence: `declared` (if present), then the names `model` recorded at
/// training time, then `fallback`. With none of the three, scaling needs a
/// known column order so `scaling_required` turns this into
/// [`Error::SchemaUnavailable`]; otherwise the caller scores in pass-through
/// mode.
pub fn resolve_schema(
    declared: Option<&FeatureSchema>,
    model: &dyn Classifier,
    fallback: Option<&FeatureSchema>,
    scaling_required: bool,
) -> Result<ResolvedSchema> {
    if let Some(schema) = declared {
        debug!(features = schema.len(), "using declared feature schema");
        return Ok(ResolvedSchema::Known {
            schema: schema.clone(),
            source: SchemaSource::Declared,
        });
    }

    if let Some(names) = model.feature_names().filter(|n| !n.is_empty()) {
        let schema = FeatureSchema::new(names.iter().cloned())?;
        debug!(features = schema.len(), "using model-recorded feature names");
        return Ok(ResolvedSchema::Known {
            schema,
            source: SchemaSource::Model,
        });
    }

    if let Some(schema) = fallback {
        debug!(features = schema.len(), "using default feature schema");
        return Ok(ResolvedSchema::Known {
            schema: schema.clone(),
            source: SchemaSource::Default,
        });
    }

    if scaling_required {
        return Err(Error::SchemaUnavailable);
    }
    Ok(ResolvedSchema::Passthrough)
}
