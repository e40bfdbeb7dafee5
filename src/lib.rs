//! # Puntuar: credit-risk scoring adapter
//!
//! Puntuar scores loan records against pre-trained binary classifiers. It
//! sits between raw input (individually entered fields or an uploaded table)
//! and a fitted model, and makes the two agree:
//!
//! - [`schema`]: which ordered feature names the model expects
//! - [`align`]: reindex any input to that order (missing → `0`, extras dropped)
//! - [`scale`]: apply a fitted scaler, falling back to unscaled input on failure
//! - [`scoring`]: label, positive-class probability and ranked importances
//! - [`export`]: augmented CSV and spreadsheet output for batch runs
//!
//! Models, scalers and schemas are loaded together into an immutable
//! [`assets::AssetBundle`]; a [`assets::Session`] swaps bundles atomically.
//!
//! ## Example
//!
//! ```
//! use puntuar::assets::AssetBundle;
//! use puntuar::data::InputRecord;
//! use puntuar::model::LogisticRegression;
//! use puntuar::scoring::{ScoringAdapter, ScoringOptions};
//! use std::sync::Arc;
//!
//! let model = LogisticRegression::new(vec![0.0, 0.0, 0.0, 0.0, 0.1], -3.0);
//! let bundle = AssetBundle::builder(Arc::new(model)).build();
//! let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());
//!
//! let record = InputRecord::new().with("NoOfArrearDays", 90.0);
//! let result = adapter.score_record(&record).unwrap();
//! assert!(result.is_high_risk());
//! ```

pub mod align;
pub mod assets;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod importance;
pub mod io;
pub mod model;
pub mod scale;
pub mod schema;
pub mod scoring;

pub use error::{Error, Result};
