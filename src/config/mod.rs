//! Declarative scorer configuration
//!
//! A YAML file names the model, scaler and schema artifacts and sets schema
//! and export options. Command-line flags override file values.

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, AssetArgs, BatchArgs, Cli, Command, ImportancesArgs, InfoArgs,
    OutputFormat, SchemaArgs, ScoreArgs, ValidateArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::{AssetPaths, ExportSettings, SchemaSettings, ScorerSpec};
pub use validate::{validate_config, ValidationError};
