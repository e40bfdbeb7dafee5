//! Importances command implementation

use super::{open_bundle, render, resolve_spec};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{ImportancesArgs, OutputFormat};
use crate::importance::render_bars;
use crate::scoring::ScoringAdapter;

pub fn run_importances(args: ImportancesArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(&args.assets)?;
    let bundle = open_bundle(&spec)?;
    let ranked = ScoringAdapter::new(&bundle, spec.scoring_options())
        .importances()
        .map_err(render)?;

    match args.format {
        OutputFormat::Text => {
            if ranked.is_empty() {
                log(level, LogLevel::Normal, "Model exposes no feature importances");
            } else {
                print!("{}", render_bars(&ranked, args.width));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ranked)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
