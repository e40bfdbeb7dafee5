//! Core CLI types - Cli, Command, and argument structs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::ScorerSpec;

/// Puntuar: credit-risk scoring against pre-trained models
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "puntuar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Score loan records for credit risk with pre-trained classifiers")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Score a single record entered as NAME=VALUE pairs
    Score(ScoreArgs),

    /// Score every row of a CSV file and export the results
    Batch(BatchArgs),

    /// Show the resolved feature schema
    Schema(SchemaArgs),

    /// Rank the model's feature importances
    Importances(ImportancesArgs),

    /// Describe the loaded asset bundle
    Info(InfoArgs),

    /// Validate a configuration file without loading artifacts
    Validate(ValidateArgs),
}

/// Artifact selection shared by every scoring command
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct AssetArgs {
    /// Path to YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the model artifact
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Override the scaler artifact
    #[arg(long)]
    pub scaler: Option<PathBuf>,

    /// Override the feature-name sidecar
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Disable the built-in default schema
    #[arg(long)]
    pub no_default_schema: bool,
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub assets: AssetArgs,

    /// Feature value as NAME=VALUE (repeatable)
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub values: Vec<String>,

    /// Also show feature importances
    #[arg(long)]
    pub explain: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the batch command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct BatchArgs {
    /// CSV file with a header row
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub assets: AssetArgs,

    /// Write augmented CSV here (stdout when neither output is given)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write an .xlsx workbook here
    #[arg(long)]
    pub xlsx: Option<PathBuf>,

    /// Override the worksheet name
    #[arg(long)]
    pub sheet_name: Option<String>,
}

/// Arguments for the schema command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub assets: AssetArgs,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the importances command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ImportancesArgs {
    #[command(flatten)]
    pub assets: AssetArgs,

    /// Bar width in characters
    #[arg(short, long, default_value_t = 40)]
    pub width: usize,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    #[command(flatten)]
    pub assets: AssetArgs,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a ScorerSpec
pub fn apply_overrides(spec: &mut ScorerSpec, args: &AssetArgs) {
    if let Some(model) = &args.model {
        spec.assets.model = model.clone();
    }
    if let Some(scaler) = &args.scaler {
        spec.assets.scaler = Some(scaler.clone());
    }
    if let Some(schema) = &args.schema {
        spec.assets.schema = Some(schema.clone());
    }
    if args.no_default_schema {
        spec.schema.use_default = false;
    }
}
