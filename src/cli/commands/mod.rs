//! CLI command implementations

mod batch;
mod importances;
mod info;
mod schema;
mod score;
mod validate;


use crate::assets::{AssetBundle, Session};
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, validate_config, AssetArgs, Cli, Command, ScorerSpec};
use crate::error::Error;
use std::sync::Arc;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Score(args) => score::run_score(args, log_level),
        Command::Batch(args) => batch::run_batch(args, log_level),
        Command::Schema(args) => schema::run_schema(args, log_level),
        Command::Importances(args) => importances::run_importances(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}

/// Render a library error for the terminal.
fn render(e: Error) -> String {
    format!("[{}] {e}", e.code())
}

/// Config file (if any) plus command-line overrides, unvalidated.
fn merged_spec(args: &AssetArgs) -> Result<ScorerSpec, String> {
    let mut spec = match &args.config {
        Some(path) => load_config(path).map_err(render)?,
        None => ScorerSpec::default(),
    };
    apply_overrides(&mut spec, args);
    Ok(spec)
}

/// Merged and validated spec.
fn resolve_spec(args: &AssetArgs) -> Result<ScorerSpec, String> {
    let spec = merged_spec(args)?;
    validate_config(&spec).map_err(|e| format!("Invalid configuration: {e}"))?;
    Ok(spec)
}

/// Load the configured assets into a fresh session and hand back the bundle.
fn open_bundle(spec: &ScorerSpec) -> Result<Arc<AssetBundle>, String> {
    let mut session = Session::new();
    session.load(&spec.assets).map_err(render)?;
    session.bundle().map_err(render)
}
