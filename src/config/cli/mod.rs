//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! puntuar score --model rf.json --set ODInterest=50 --set NoOfArrearDays=45
//! puntuar batch loans.csv --config puntuar.yaml --output scored.csv
//! puntuar importances --config puntuar.yaml
//! puntuar schema --model rf.json --schema feature_names.json
//! puntuar info --config puntuar.yaml
//! puntuar validate puntuar.yaml
//! ```

mod core;
mod types;


pub use self::core::{
    apply_overrides, parse_args, AssetArgs, BatchArgs, Cli, Command, ImportancesArgs, InfoArgs,
    SchemaArgs, ScoreArgs, ValidateArgs,
};
pub use types::OutputFormat;
