//! Batch results: the uploaded table plus one prediction per row

use super::result::ScoringWarning;
use super::RowScore;
use crate::align::AlignmentReport;
use crate::data::Table;
use crate::schema::SchemaSource;

/// Scored table. Original columns, extras included, are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    table: Table,
    rows: Vec<RowScore>,
    warnings: Vec<ScoringWarning>,
    alignment: AlignmentReport,
    schema_source: Option<SchemaSource>,
}

impl BatchReport {
    pub(crate) fn new(
        table: Table,
        rows: Vec<RowScore>,
        warnings: Vec<ScoringWarning>,
        alignment: AlignmentReport,
        schema_source: Option<SchemaSource>,
    ) -> Self {
        debug_assert_eq!(table.n_rows(), rows.len());
        Self {
            table,
            rows,
            warnings,
            alignment,
            schema_source,
        }
    }

    /// The input table as uploaded.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// One score per table row, in row order.
    pub fn scores(&self) -> &[RowScore] {
        &self.rows
    }

    pub fn warnings(&self) -> &[ScoringWarning] {
        &self.warnings
    }

    pub fn alignment(&self) -> &AlignmentReport {
        &self.alignment
    }

    pub fn schema_source(&self) -> Option<SchemaSource> {
        self.schema_source
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn high_risk_count(&self) -> usize {
        self.rows.iter().filter(|r| r.risk.is_high()).count()
    }

    /// Whether any row carries a probability.
    pub fn has_probabilities(&self) -> bool {
        self.rows.iter().any(|r| r.probability.is_some())
    }

    /// Original cells and score of each row.
    pub fn iter(&self) -> impl Iterator<Item = (&[String], &RowScore)> {
        self.table
            .rows()
            .iter()
            .map(Vec::as_slice)
            .zip(self.rows.iter())
    }
}
