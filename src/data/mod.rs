//! Scoring inputs: single records and uploaded tables.
//!
//! Both implement [`FeatureSource`], which is all alignment needs: a row
//! count, the natural column order, and a by-name value lookup.

mod record;
mod table;

pub use record::InputRecord;
pub use table::Table;

use crate::error::Result;

/// Tabular input addressable by feature name.
pub trait FeatureSource {
    /// Number of rows.
    fn n_rows(&self) -> usize;

    /// Column names in the input's own order.
    fn column_names(&self) -> Vec<String>;

    /// Value of `column` in `row`; `None` when the column or cell is absent.
    fn value(&self, row: usize, column: &str) -> Result<Option<f64>>;
}

impl FeatureSource for InputRecord {
    fn n_rows(&self) -> usize {
        1
    }

    fn column_names(&self) -> Vec<String> {
        self.names().map(str::to_string).collect()
    }

    fn value(&self, _row: usize, column: &str) -> Result<Option<f64>> {
        Ok(self.get(column))
    }
}

impl FeatureSource for [InputRecord] {
    fn n_rows(&self) -> usize {
        self.len()
    }

    fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in self {
            for name in record.names() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    fn value(&self, row: usize, column: &str) -> Result<Option<f64>> {
        Ok(self.get(row).and_then(|r| r.get(column)))
    }
}

impl FeatureSource for Table {
    fn n_rows(&self) -> usize {
        self.n_rows()
    }

    fn column_names(&self) -> Vec<String> {
        self.headers().to_vec()
    }

    fn value(&self, row: usize, column: &str) -> Result<Option<f64>> {
        match self.column_index(column) {
            Some(col) => self.numeric_cell(row, col),
            None => Ok(None),
        }
    }
}
