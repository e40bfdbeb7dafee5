//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;
use std::path::PathBuf;

fn arb_valid_spec() -> impl Strategy<Value = ScorerSpec> {
    (
        "[a-z][a-z0-9_]{0,15}\\.(json|yaml)", // model
        "[A-Za-z][A-Za-z0-9 _-]{0,30}",       // sheet name
        "[A-Za-z]{1,12}",                     // label column
    )
        .prop_map(|(model, sheet_name, label_column)| ScorerSpec {
            assets: AssetPaths {
                model: PathBuf::from(model),
                ..Default::default()
            },
            export: ExportSettings {
                sheet_name,
                probability_column: format!("{label_column}_p"),
                label_column,
            },
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_forbidden_char_rejected(
        spec in arb_valid_spec(),
        c in prop::sample::select(vec!['[', ']', ':', '*', '?', '/', '\\']),
    ) {
        let mut spec = spec;
        spec.export.sheet_name = format!("a{c}");
        prop_assert_eq!(
            validate_config(&spec),
            Err(ValidationError::InvalidSheetChar(format!("a{c}"), c))
        );
    }

    #[test]
    fn prop_long_sheet_name_rejected(spec in arb_valid_spec(), len in 32usize..64) {
        let mut spec = spec;
        spec.export.sheet_name = "s".repeat(len);
        let rejected = matches!(
            validate_config(&spec),
            Err(ValidationError::SheetNameTooLong(_, n)) if n == len
        );
        prop_assert!(rejected);
    }
}
