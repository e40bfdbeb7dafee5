//! Feature schema: the ordered column names a trained model expects.
//!
//! A schema comes from one of three sources, in precedence order:
//! an explicit sidecar declaration, the names a fitted model recorded at
//! training time, or the built-in default of five delinquency features.

mod field;
mod resolve;


pub use field::FieldKind;
pub use resolve::{resolve_schema, ResolvedSchema, SchemaSource};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default feature order used when no other source is available.
pub const DEFAULT_FEATURES: [&str; 5] = [
    "ODInterest",
    "ODPrincipal",
    "PrincipalDue",
    "InterestDue",
    "NoOfArrearDays",
];

/// Ordered, unique, non-empty list of feature names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema, rejecting empty lists, blank names and duplicates.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::InvalidSchema {
                message: "schema has no features".to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if name.trim().is_empty() {
                return Err(Error::InvalidSchema {
                    message: "feature names must not be blank".to_string(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidSchema {
                    message: format!("duplicate feature '{name}'"),
                });
            }
        }

        Ok(Self { names })
    }

    /// Build a schema from a declaration that may legitimately be empty.
    ///
    /// An empty declaration means "not declared" and yields `None`.
    pub fn from_declared(names: Vec<String>) -> Result<Option<Self>> {
        if names.is_empty() {
            return Ok(None);
        }
        Self::new(names).map(Some)
    }

    /// The five-feature delinquency schema.
    pub fn credit_default() -> Self {
        Self {
            names: DEFAULT_FEATURES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Parse a JSON array of strings.
    pub fn from_json_str(json: &str) -> Result<Option<Self>> {
        let names: Vec<String> = serde_json::from_str(json).map_err(|e| Error::Serialization {
            message: format!("schema must be a JSON array of strings: {e}"),
        })?;
        Self::from_declared(names)
    }

    /// Feature names in column order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate feature names in column order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column index of a feature.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Whether the schema names this feature.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Entry kind of every feature, in column order.
    pub fn field_kinds(&self) -> Vec<(&str, FieldKind)> {
        self.iter()
            .map(|name| (name, FieldKind::for_feature(name)))
            .collect()
    }
}

impl TryFrom<Vec<String>> for FeatureSchema {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        Self::new(names)
    }
}

impl From<FeatureSchema> for Vec<String> {
    fn from(schema: FeatureSchema) -> Self {
        schema.names
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::credit_default()
    }
}
