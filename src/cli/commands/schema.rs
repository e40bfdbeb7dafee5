//! Schema command implementation

use super::{open_bundle, render, resolve_spec};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, SchemaArgs};
use crate::schema::{FieldKind, ResolvedSchema};
use crate::scoring::ScoringAdapter;

pub fn run_schema(args: SchemaArgs, level: LogLevel) -> Result<(), String> {
    let spec = resolve_spec(&args.assets)?;
    let bundle = open_bundle(&spec)?;
    let resolved = ScoringAdapter::new(&bundle, spec.scoring_options())
        .resolve_schema()
        .map_err(render)?;

    match args.format {
        OutputFormat::Text => match &resolved {
            ResolvedSchema::Known { schema, source } => {
                log(
                    level,
                    LogLevel::Normal,
                    &format!("Feature schema ({source}, {} features):", schema.len()),
                );
                for (i, (name, kind)) in schema.field_kinds().into_iter().enumerate() {
                    println!("  {:>2}. {name} ({kind})", i + 1);
                }
            }
            ResolvedSchema::Passthrough => {
                println!("No feature schema: inputs are scored in their own column order");
            }
        },
        OutputFormat::Json => {
            let value = match &resolved {
                ResolvedSchema::Known { schema, source } => serde_json::json!({
                    "source": source.to_string(),
                    "features": schema
                        .iter()
                        .map(|name| serde_json::json!({
                            "name": name,
                            "kind": FieldKind::for_feature(name).to_string(),
                        }))
                        .collect::<Vec<_>>(),
                }),
                ResolvedSchema::Passthrough => serde_json::json!({
                    "source": "input",
                    "features": [],
                }),
            };
            let json = serde_json::to_string_pretty(&value)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}
