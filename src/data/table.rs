//! Uploaded delimited table with a header row

use crate::error::{AssetKind, Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header plus string cells, kept verbatim so batch output can echo the
/// original columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking every row matches the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(Error::invalid_input(
                    format!("row {}", i + 1),
                    format!("has {} cells, header has {}", row.len(), headers.len()),
                ));
            }
        }
        Ok(Self { headers, rows })
    }

    /// Read CSV with a header row. Cells are trimmed.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| Error::Serialization {
                message: format!("CSV header: {e}"),
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| Error::Serialization {
                message: format!("CSV record: {e}"),
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Self::new(headers, rows)
    }

    /// Read a CSV file.
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::asset(AssetKind::Dataset, path, e))?;
        Self::from_csv_reader(file)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    /// Index of the first column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw cell text.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// Cell parsed as a number. Empty cells read as absent.
    pub fn numeric_cell(&self, row: usize, col: usize) -> Result<Option<f64>> {
        let Some(raw) = self.cell(row, col) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(Error::invalid_input(
                &self.headers[col],
                format!("row {}: '{raw}' is not numeric", row + 1),
            )),
        }
    }
}
