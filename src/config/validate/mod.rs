//! Scorer configuration checks
//!
//! Run on a parsed [`ScorerSpec`](crate::config::ScorerSpec) before any
//! artifact is opened.

mod error;
mod validator;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use error::ValidationError;
pub use validator::validate_config;
