//! Entry kinds for individually-entered feature values

use crate::error::{Error, Result};
use std::fmt;

/// How a feature value is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Whole number, e.g. days in arrears or loan term
    Integer,
    /// Floating point amount
    Float,
}

impl FieldKind {
    /// Names containing `Day` or `Term` are counts; everything else is an amount.
    pub fn for_feature(name: &str) -> Self {
        if name.contains("Day") || name.contains("Term") {
            Self::Integer
        } else {
            Self::Float
        }
    }

    /// Parse and validate a raw entry for `name`.
    ///
    /// Values must be finite and at least 0; integer fields reject fractions.
    pub fn parse(self, name: &str, raw: &str) -> Result<f64> {
        let raw = raw.trim();
        let value = match self {
            Self::Integer => raw
                .parse::<i64>()
                .map(|v| v as f64)
                .map_err(|_| Error::invalid_input(name, format!("'{raw}' is not a whole number")))?,
            Self::Float => raw
                .parse::<f64>()
                .map_err(|_| Error::invalid_input(name, format!("'{raw}' is not a number")))?,
        };
        self.validate(name, value)
    }

    /// Validate an already-numeric entry for `name`.
    pub fn validate(self, name: &str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(Error::invalid_input(name, "value must be finite"));
        }
        if value < 0.0 {
            return Err(Error::invalid_input(
                name,
                format!("{value} is below the minimum of 0"),
            ));
        }
        if self == Self::Integer && value.fract() != 0.0 {
            return Err(Error::invalid_input(
                name,
                format!("{value} is not a whole number"),
            ));
        }
        Ok(value)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}
