//! Batch command implementation

use super::{merged_spec, open_bundle, render};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{validate_config, BatchArgs};
use crate::data::Table;
use crate::export::{write_csv, write_csv_file, write_xlsx};
use crate::scoring::ScoringAdapter;

pub fn run_batch(args: BatchArgs, level: LogLevel) -> Result<(), String> {
    let mut spec = merged_spec(&args.assets)?;
    if let Some(sheet_name) = &args.sheet_name {
        spec.export.sheet_name = sheet_name.clone();
    }
    validate_config(&spec).map_err(|e| format!("Invalid configuration: {e}"))?;

    let table = Table::read_csv(&args.input).map_err(render)?;
    let bundle = open_bundle(&spec)?;
    let adapter = ScoringAdapter::new(&bundle, spec.scoring_options());
    let report = adapter.score_batch(table).map_err(render)?;

    if level != LogLevel::Quiet {
        for warning in report.warnings() {
            eprintln!("Warning: {warning}");
        }
    }

    let options = spec.export_options();
    let to_stdout = args.output.is_none() && args.xlsx.is_none();
    if to_stdout {
        write_csv(&report, &options, std::io::stdout().lock()).map_err(render)?;
        return Ok(());
    }

    if let Some(path) = &args.output {
        write_csv_file(&report, &options, path).map_err(render)?;
        log(level, LogLevel::Normal, &format!("Wrote {}", path.display()));
    }
    if let Some(path) = &args.xlsx {
        write_xlsx(&report, &options, path).map_err(render)?;
        log(level, LogLevel::Normal, &format!("Wrote {}", path.display()));
    }

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Scored {} rows: {} high risk",
            report.n_rows(),
            report.high_risk_count()
        ),
    );
    if !report.alignment().filled.is_empty() {
        log(
            level,
            LogLevel::Verbose,
            &format!("Zero-filled columns: {}", report.alignment().filled.join(", ")),
        );
    }
    if !report.alignment().blank.is_empty() {
        log(
            level,
            LogLevel::Verbose,
            &format!("Columns with empty cells: {}", report.alignment().blank.join(", ")),
        );
    }

    Ok(())
}
