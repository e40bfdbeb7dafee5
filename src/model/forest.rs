//! Random forest of binary decision trees

use super::{check_input, default_classes, validate_classes, validate_feature_names};
use super::{Classifier, PredictionError};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// One node of a fitted decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go `left` when `x[feature] <= threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Class counts (or fractions) of the training samples in this leaf.
    Leaf { value: Vec<f64> },
}

/// Fitted decision tree stored as a flat node array rooted at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("decision tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!(
                            "node {idx} splits on feature {feature}, model has {n_features}"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx} has a non-finite threshold"));
                    }
                    if *left >= self.nodes.len() || *right >= self.nodes.len() {
                        return Err(format!("node {idx} points past the end of the tree"));
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(format!(
                            "leaf {idx} has {} class values, expected {n_classes}",
                            value.len()
                        ));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(format!("leaf {idx} has negative or non-finite values"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Normalized class distribution of the leaf `row` lands in.
    fn leaf_distribution(&self, row: ArrayView1<'_, f64>) -> Result<Vec<f64>, PredictionError> {
        let mut idx = 0;
        // a well-formed tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = row.get(*feature).ok_or_else(|| {
                        PredictionError::Malformed(format!(
                            "node {idx} splits on missing feature {feature}"
                        ))
                    })?;
                    idx = if *value <= *threshold { *left } else { *right };
                }
                Some(TreeNode::Leaf { value }) => {
                    let total: f64 = value.iter().sum();
                    if total <= 0.0 {
                        return Err(PredictionError::Malformed(format!("leaf {idx} is empty")));
                    }
                    return Ok(value.iter().map(|v| v / total).collect());
                }
                None => {
                    return Err(PredictionError::Malformed(format!(
                        "node index {idx} out of range"
                    )))
                }
            }
        }
        Err(PredictionError::Malformed("cycle in decision tree".to_string()))
    }
}

/// Fitted random forest. Probabilities are the mean of the trees' leaf
/// distributions; the label is the class with the highest mean probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    #[serde(default = "default_classes")]
    pub classes: Vec<i64>,
    pub trees: Vec<DecisionTree>,
    /// Impurity-based importances computed at training time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_importances: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
}

impl RandomForest {
    pub fn new(n_features: usize, trees: Vec<DecisionTree>) -> Self {
        Self {
            n_features,
            classes: default_classes(),
            trees,
            feature_importances: None,
            feature_names: None,
        }
    }

    pub fn with_importances(mut self, importances: Vec<f64>) -> Self {
        self.feature_importances = Some(importances);
        self
    }

    pub fn with_feature_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.n_features == 0 {
            return Err("random forest has no features".to_string());
        }
        if self.trees.is_empty() {
            return Err("random forest has no trees".to_string());
        }
        validate_classes(&self.classes)?;
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.classes.len())
                .map_err(|e| format!("tree {i}: {e}"))?;
        }
        if let Some(importances) = &self.feature_importances {
            if importances.len() != self.n_features {
                return Err(format!(
                    "{} importance weights recorded for {} features",
                    importances.len(),
                    self.n_features
                ));
            }
        }
        validate_feature_names(self.feature_names.as_deref(), self.n_features)
    }
}

impl Classifier for RandomForest {
    fn name(&self) -> &'static str {
        "random_forest"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Array1<i64>, PredictionError> {
        let proba = self.predict_proba(x)?;
        let labels = proba
            .rows()
            .into_iter()
            .map(|row| {
                // first maximum wins on ties
                let mut best = 0;
                for (class, p) in row.iter().enumerate() {
                    if *p > row[best] {
                        best = class;
                    }
                }
                self.classes[best]
            })
            .collect::<Vec<_>>();
        Ok(Array1::from(labels))
    }

    fn supports_probability(&self) -> bool {
        true
    }

    fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>, PredictionError> {
        check_input(&x, self.n_features)?;
        if self.trees.is_empty() {
            return Err(PredictionError::Malformed("random forest has no trees".to_string()));
        }

        let n_classes = self.classes.len();
        let mut proba = Array2::zeros((x.nrows(), n_classes));
        for (row_idx, row) in x.rows().into_iter().enumerate() {
            for tree in &self.trees {
                let dist = tree.leaf_distribution(row)?;
                if dist.len() != n_classes {
                    return Err(PredictionError::Malformed(format!(
                        "leaf has {} class values, expected {n_classes}",
                        dist.len()
                    )));
                }
                for (class, p) in dist.into_iter().enumerate() {
                    proba[[row_idx, class]] += p;
                }
            }
        }
        proba /= self.trees.len() as f64;
        Ok(proba)
    }

    fn feature_importances(&self) -> Option<&[f64]> {
        self.feature_importances.as_deref()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
