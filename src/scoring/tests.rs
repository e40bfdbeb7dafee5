use super::*;
use crate::assets::AssetBundle;
use crate::data::{InputRecord, Table};
use crate::error::Error;
use crate::model::{
    DecisionTree, LinearSvc, LogisticRegression, PredictionError, RandomForest, TreeNode,
};
use crate::scale::{ScalingError, StandardScaler};
use crate::schema::{FeatureSchema, SchemaSource};
use approx::assert_abs_diff_eq;
use ndarray::{Array1, Array2, ArrayView2};
use std::sync::Arc;

/// Always predicts `label` with positive-class probability `p`.
#[derive(Debug)]
struct Fixed {
    label: i64,
    p: f64,
    n_features: usize,
}

impl Classifier for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> std::result::Result<Array1<i64>, PredictionError> {
        Ok(Array1::from_elem(x.nrows(), self.label))
    }

    fn supports_probability(&self) -> bool {
        true
    }

    fn predict_proba(&self, x: ArrayView2<'_, f64>) -> std::result::Result<Array2<f64>, PredictionError> {
        let mut out = Array2::zeros((x.nrows(), 2));
        for mut row in out.rows_mut() {
            row[0] = 1.0 - self.p;
            row[1] = self.p;
        }
        Ok(out)
    }
}

/// Fails every prediction.
#[derive(Debug)]
struct Broken;

impl Classifier for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn n_features(&self) -> usize {
        5
    }

    fn predict(&self, _x: ArrayView2<'_, f64>) -> std::result::Result<Array1<i64>, PredictionError> {
        Err(PredictionError::Malformed("corrupt weights".into()))
    }
}

fn bundle(model: impl Classifier + 'static) -> AssetBundle {
    AssetBundle::builder(Arc::new(model)).build()
}

fn forest() -> RandomForest {
    // NoOfArrearDays > 30 → high risk
    let tree = DecisionTree::new(vec![
        TreeNode::Split {
            feature: 4,
            threshold: 30.0,
            left: 1,
            right: 2,
        },
        TreeNode::Leaf {
            value: vec![9.0, 1.0],
        },
        TreeNode::Leaf {
            value: vec![1.0, 3.0],
        },
    ]);
    RandomForest::new(5, vec![tree]).with_importances(vec![0.1, 0.05, 0.15, 0.1, 0.6])
}

#[test]
fn test_format_probability() {
    assert_eq!(format_probability(0.82), "82.00%");
    assert_eq!(format_probability(0.0), "0.00%");
    assert_eq!(format_probability(1.0), "100.00%");
    assert_eq!(format_probability(0.12345), "12.35%");
}

#[test]
fn test_risk_label() {
    assert_eq!(RiskLabel::from_label(1), RiskLabel::High);
    assert_eq!(RiskLabel::from_label(0), RiskLabel::Low);
    assert_eq!(RiskLabel::High.to_string(), "High risk");
    assert_eq!(RiskLabel::Low.to_string(), "Low risk");
}

#[test]
fn test_high_risk_with_probability() {
    let bundle = bundle(Fixed {
        label: 1,
        p: 0.82,
        n_features: 5,
    });
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());
    let result = adapter
        .score_record(&InputRecord::new().with("ODInterest", 50.0))
        .unwrap();

    assert!(result.is_high_risk());
    assert_eq!(result.probability_text(), "82.00%");
    assert_eq!(result.summary(), "High risk (82.00%)");
    assert_eq!(result.schema_source, Some(SchemaSource::Default));
    assert_eq!(result.warnings, vec![ScoringWarning::DefaultSchema]);
}

#[test]
fn test_label_only_model_has_no_probability() {
    let bundle = bundle(LinearSvc::new(vec![0.0, 0.0, 0.0, 0.0, 1.0], -30.0));
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());

    let result = adapter
        .score_record(&InputRecord::new().with("NoOfArrearDays", 90.0))
        .unwrap();
    assert_eq!(result.risk, RiskLabel::High);
    assert_eq!(result.probability, None);
    assert_eq!(result.probability_text(), "n/a");
    assert_eq!(result.summary(), "High risk");
    assert!(result.importances.is_empty());
}

#[test]
fn test_forest_reports_importances() {
    let bundle = bundle(forest());
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());
    let result = adapter
        .score_record(&InputRecord::new().with("NoOfArrearDays", 10.0))
        .unwrap();

    assert_eq!(result.risk, RiskLabel::Low);
    assert_abs_diff_eq!(result.probability.unwrap(), 0.1, epsilon = 1e-12);
    assert_eq!(result.importances[0].feature, "NoOfArrearDays");
    assert_eq!(result.importances.len(), 5);
}

#[test]
fn test_declared_schema_drives_alignment() {
    let model = LogisticRegression::new(vec![1.0, -1.0], 0.0);
    let bundle = AssetBundle::builder(Arc::new(model))
        .schema(FeatureSchema::new(["b", "a"]).unwrap())
        .build();
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());

    // w·[b, a] = 3 - 1 > 0
    let result = adapter
        .score_record(&InputRecord::new().with("a", 1.0).with("b", 3.0))
        .unwrap();
    assert_eq!(result.label, 1);
    assert_eq!(result.schema_source, Some(SchemaSource::Declared));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_scaling_failure_is_a_warning() {
    let model = LogisticRegression::new(vec![1.0; 5], -10.0);
    let bundle = AssetBundle::builder(Arc::new(model))
        .scaler(Arc::new(StandardScaler::new(vec![0.0; 3], vec![1.0; 3])))
        .build();
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());

    let result = adapter
        .score_record(&InputRecord::new().with("ODInterest", 20.0))
        .unwrap();
    assert_eq!(result.label, 1);
    assert!(result.warnings.contains(&ScoringWarning::ScalingFailed(
        ScalingError::ShapeMismatch {
            expected: 3,
            actual: 5
        }
    )));
}

#[test]
fn test_scaler_applied() {
    let model = LogisticRegression::new(vec![1.0; 5], 0.0);
    let bundle = AssetBundle::builder(Arc::new(model))
        .scaler(Arc::new(StandardScaler::new(vec![100.0; 5], vec![1.0; 5])))
        .build();
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());

    // unscaled would be positive; scaled every value is far below zero
    let result = adapter
        .score_record(&InputRecord::new().with("ODInterest", 50.0))
        .unwrap();
    assert_eq!(result.risk, RiskLabel::Low);
    assert!(result.probability.unwrap() < 1e-6);
}

#[test]
fn test_scaler_without_schema_fails() {
    let model = LogisticRegression::new(vec![1.0; 5], 0.0);
    let bundle = AssetBundle::builder(Arc::new(model))
        .scaler(Arc::new(StandardScaler::new(vec![0.0; 5], vec![1.0; 5])))
        .build();
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::without_default());

    let err = adapter.score_record(&InputRecord::new()).unwrap_err();
    assert!(matches!(err, Error::SchemaUnavailable));
}

#[test]
fn test_passthrough_uses_input_order() {
    let model = LogisticRegression::new(vec![1.0, -1.0], 0.0);
    let bundle = bundle(model);
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::without_default());

    let result = adapter
        .score_record(&InputRecord::new().with("x", 1.0).with("y", 4.0))
        .unwrap();
    assert_eq!(result.label, 0);
    assert_eq!(result.schema_source, None);
    assert_eq!(result.warnings, vec![ScoringWarning::Passthrough]);
}

#[test]
fn test_prediction_failure_surfaces() {
    let bundle = bundle(Broken);
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());
    let err = adapter.score_record(&InputRecord::new()).unwrap_err();
    assert!(matches!(err, Error::PredictionFailed(_)));
    assert_eq!(err.code(), "E021");
}

#[test]
fn test_batch_keeps_original_columns() {
    let table = Table::from_csv_reader(
        "PrincipalDue,ODInterest,Extra,NoOfArrearDays\n100,20,999,5\n0,0,x,60\n".as_bytes(),
    )
    .unwrap();
    let bundle = bundle(forest());
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());

    let report = adapter.score_batch(table.clone()).unwrap();
    assert_eq!(report.table(), &table);
    assert_eq!(report.n_rows(), 2);
    assert_eq!(report.high_risk_count(), 1);
    assert!(report.has_probabilities());
    assert_eq!(report.alignment().dropped, vec!["Extra"]);

    let scores = report.scores();
    assert_eq!(scores[0].risk, RiskLabel::Low);
    assert_eq!(scores[1].risk, RiskLabel::High);
    assert_abs_diff_eq!(scores[1].probability.unwrap(), 0.75, epsilon = 1e-12);

    let (cells, _) = report.iter().nth(1).unwrap();
    assert_eq!(cells[2], "x");
}

#[test]
fn test_empty_batch() {
    let table = Table::from_csv_reader("ODInterest\n".as_bytes()).unwrap();
    let bundle = bundle(forest());
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());

    let report = adapter.score_batch(table).unwrap();
    assert_eq!(report.n_rows(), 0);
    assert_eq!(report.high_risk_count(), 0);
}

#[test]
fn test_adapter_importances() {
    let bundle = bundle(forest());
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());
    let ranked = adapter.importances().unwrap();
    assert_eq!(ranked[0].feature, "NoOfArrearDays");

    let svc = self::bundle(LinearSvc::new(vec![1.0; 5], 0.0));
    let adapter = ScoringAdapter::new(&svc, ScoringOptions::default());
    assert!(adapter.importances().unwrap().is_empty());
}

#[test]
fn test_malformed_probability_matrix() {
    #[derive(Debug)]
    struct OneColumn;

    impl Classifier for OneColumn {
        fn name(&self) -> &'static str {
            "one_column"
        }
        fn n_features(&self) -> usize {
            5
        }
        fn predict(&self, x: ArrayView2<'_, f64>) -> std::result::Result<Array1<i64>, PredictionError> {
            Ok(Array1::zeros(x.nrows()))
        }
        fn supports_probability(&self) -> bool {
            true
        }
        fn predict_proba(&self, x: ArrayView2<'_, f64>) -> std::result::Result<Array2<f64>, PredictionError> {
            Ok(Array2::zeros((x.nrows(), 1)))
        }
    }

    let bundle = bundle(OneColumn);
    let adapter = ScoringAdapter::new(&bundle, ScoringOptions::default());
    assert!(matches!(
        adapter.score_record(&InputRecord::new()),
        Err(Error::PredictionFailed(PredictionError::Malformed(_)))
    ));
}
