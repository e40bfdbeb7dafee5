//! Feature alignment: reindex any input to a schema's column order.
//!
//! Policy, reproduced exactly:
//! - a schema feature missing from the input is filled with `0.0`
//! - an input column the schema does not name is dropped
//!
//! Neither is reported as an error. [`AlignmentReport`] records what was
//! filled and dropped so callers can show it, but the matrix is the same
//! either way.

use crate::data::FeatureSource;
use crate::error::Result;
use crate::schema::FeatureSchema;
use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::debug;

/// 2-D matrix whose columns are named and ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedMatrix {
    columns: Vec<String>,
    values: Array2<f64>,
}

impl AlignedMatrix {
    /// Pair values with column names. Panics if widths differ, which is a
    /// programming error rather than an input error.
    pub(crate) fn new(columns: Vec<String>, values: Array2<f64>) -> Self {
        assert_eq!(columns.len(), values.ncols(), "column names must match matrix width");
        Self { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.values.row(i)
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    /// Same columns, new values of the same shape.
    pub(crate) fn with_values(&self, values: Array2<f64>) -> Self {
        Self::new(self.columns.clone(), values)
    }
}

/// Columns filled and dropped while aligning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    /// Schema features absent from the input, zero-filled
    pub filled: Vec<String>,
    /// Input columns not in the schema, discarded
    pub dropped: Vec<String>,
    /// Schema features present in the input with at least one empty cell,
    /// zero-filled in those rows
    pub blank: Vec<String>,
}

impl AlignmentReport {
    /// True when the input matched the schema exactly (in any order).
    pub fn is_exact(&self) -> bool {
        self.filled.is_empty() && self.dropped.is_empty() && self.blank.is_empty()
    }
}

/// Aligned matrix together with its report.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub matrix: AlignedMatrix,
    pub report: AlignmentReport,
}

/// Reindex `source` to `schema` order, zero-filling missing features and
/// dropping extras. The result always has `schema.len()` columns.
pub fn align<S: FeatureSource + ?Sized>(source: &S, schema: &FeatureSchema) -> Result<Alignment> {
    let present = source.column_names();
    let (values, had_blank) = fill(source, schema.names())?;
    let report = AlignmentReport {
        filled: schema
            .iter()
            .filter(|name| !present.iter().any(|p| p == name))
            .map(str::to_string)
            .collect(),
        dropped: present
            .iter()
            .filter(|name| !schema.contains(name))
            .cloned()
            .collect(),
        blank: schema
            .iter()
            .zip(&had_blank)
            .filter(|(name, blank)| **blank && present.iter().any(|p| p == name))
            .map(|(name, _)| name.to_string())
            .collect(),
    };

    if !report.is_exact() {
        debug!(
            filled = ?report.filled,
            dropped = ?report.dropped,
            blank = ?report.blank,
            "input reconciled against feature schema"
        );
    }

    Ok(Alignment {
        matrix: AlignedMatrix::new(schema.names().to_vec(), values),
        report,
    })
}

/// Pass-through alignment: keep the input's own column order.
///
/// Used only when no schema is known and none is needed.
pub fn align_natural<S: FeatureSource + ?Sized>(source: &S) -> Result<Alignment> {
    let columns = source.column_names();
    let (values, had_blank) = fill(source, &columns)?;
    let report = AlignmentReport {
        blank: columns
            .iter()
            .zip(&had_blank)
            .filter(|(_, blank)| **blank)
            .map(|(name, _)| name.clone())
            .collect(),
        ..AlignmentReport::default()
    };
    Ok(Alignment {
        matrix: AlignedMatrix::new(columns, values),
        report,
    })
}

/// Values in `columns` order plus, per column, whether any row lacked a value.
fn fill<S: FeatureSource + ?Sized>(source: &S, columns: &[String]) -> Result<(Array2<f64>, Vec<bool>)> {
    let mut values = Array2::zeros((source.n_rows(), columns.len()));
    let mut had_blank = vec![false; columns.len()];
    for row in 0..source.n_rows() {
        for (col, name) in columns.iter().enumerate() {
            match source.value(row, name)? {
                Some(v) => values[[row, col]] = v,
                None => had_blank[col] = true,
            }
        }
    }
    Ok((values, had_blank))
}
