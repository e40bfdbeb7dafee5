//! Score command implementation

use super::{open_bundle, render, resolve_spec};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, ScoreArgs};
use crate::data::InputRecord;
use crate::importance::render_bars;
use crate::scoring::ScoringAdapter;

pub fn run_score(args: ScoreArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(&args.assets)?;
    let record = InputRecord::parse_assignments(&args.values).map_err(render)?;
    let bundle = open_bundle(&spec)?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Model: {} ({})",
            bundle.model().name(),
            bundle.capabilities().describe()
        ),
    );

    let adapter = ScoringAdapter::new(&bundle, spec.scoring_options());
    let result = adapter.score_record(&record).map_err(render)?;

    match args.format {
        OutputFormat::Text => {
            if level != LogLevel::Quiet {
                for warning in &result.warnings {
                    eprintln!("Warning: {warning}");
                }
            }
            if !result.alignment.filled.is_empty() {
                log(
                    level,
                    LogLevel::Verbose,
                    &format!("Zero-filled: {}", result.alignment.filled.join(", ")),
                );
            }
            if !result.alignment.dropped.is_empty() {
                log(
                    level,
                    LogLevel::Verbose,
                    &format!("Ignored: {}", result.alignment.dropped.join(", ")),
                );
            }

            println!("Prediction: {}", result.risk);
            println!("Probability: {}", result.probability_text());

            if args.explain {
                if result.importances.is_empty() {
                    log(level, LogLevel::Normal, "Model exposes no feature importances");
                } else {
                    println!();
                    println!("Feature importances:");
                    print!("{}", render_bars(&result.importances, 40));
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
