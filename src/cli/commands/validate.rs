//! Validate command implementation

use super::render;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ValidateArgs};

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_config(&args.config).map_err(render)?;

    log(level, LogLevel::Normal, "✓ Configuration is valid");
    log(
        level,
        LogLevel::Verbose,
        &format!("  Model: {}", spec.assets.model.display()),
    );
    if let Some(scaler) = &spec.assets.scaler {
        log(level, LogLevel::Verbose, &format!("  Scaler: {}", scaler.display()));
    }
    if let Some(schema) = &spec.assets.schema {
        log(level, LogLevel::Verbose, &format!("  Schema: {}", schema.display()));
    }
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Default schema fallback: {}",
            if spec.schema.use_default { "enabled" } else { "disabled" }
        ),
    );

    Ok(())
}
