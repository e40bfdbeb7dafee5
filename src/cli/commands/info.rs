//! Info command implementation

use super::{open_bundle, resolve_spec};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(&args.assets)?;
    let bundle = open_bundle(&spec)?;
    let model = bundle.model();
    let scaler = bundle.scaler().map(|s| s.name());

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Asset bundle:");
            println!("Model: {} ({} features)", model.name(), model.n_features());
            println!("Capabilities: {}", bundle.capabilities().describe());
            println!("Scaler: {}", scaler.unwrap_or("none"));
            match bundle.declared_schema() {
                Some(schema) => println!("Declared schema: {} features", schema.len()),
                None => println!("Declared schema: none"),
            }
            println!("Fingerprint: {}", bundle.short_fingerprint());
            log(
                level,
                LogLevel::Verbose,
                &format!("Loaded at: {}", bundle.loaded_at().to_rfc3339()),
            );
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "model": model.name(),
                "n_features": model.n_features(),
                "capabilities": {
                    "probability": bundle.capabilities().probability,
                    "importances": bundle.capabilities().importances,
                },
                "scaler": scaler,
                "declared_schema": bundle.declared_schema().map(|s| s.names().to_vec()),
                "fingerprint": bundle.fingerprint(),
                "loaded_at": bundle.loaded_at().to_rfc3339(),
            });
            let json = serde_json::to_string_pretty(&value)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
