//! Batch result export: delimited text and spreadsheet.
//!
//! Both writers emit every original column followed by the predicted label
//! (`1`/`0`) and the positive-class probability (empty when the model has
//! no probability estimates).

use crate::error::{Error, Result};
use crate::scoring::{BatchReport, RowScore};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Maximum worksheet name length accepted by spreadsheet applications.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters not allowed in a worksheet name.
pub const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Output column names and sheet name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub sheet_name: String,
    pub label_column: String,
    pub probability_column: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Predictions".to_string(),
            label_column: "Prediction".to_string(),
            probability_column: "Probability".to_string(),
        }
    }
}

impl ExportOptions {
    /// Header row: original columns plus the two prediction columns.
    pub fn headers(&self, report: &BatchReport) -> Vec<String> {
        let mut headers = report.table().headers().to_vec();
        headers.push(self.label_column.clone());
        headers.push(self.probability_column.clone());
        headers
    }
}

fn probability_cell(score: &RowScore) -> String {
    score.probability.map(|p| p.to_string()).unwrap_or_default()
}

/// Write the augmented table as CSV.
pub fn write_csv<W: Write>(report: &BatchReport, options: &ExportOptions, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| Error::Export {
        message: format!("CSV write failed: {e}"),
    };

    wtr.write_record(options.headers(report)).map_err(csv_err)?;
    for (cells, score) in report.iter() {
        let mut record: Vec<String> = cells.to_vec();
        record.push(score.label.to_string());
        record.push(probability_cell(score));
        wtr.write_record(&record).map_err(csv_err)?;
    }
    wtr.flush()
        .map_err(|e| Error::io("flushing CSV output", e))?;
    Ok(())
}

/// Write the augmented table as CSV to `path`.
pub fn write_csv_file(report: &BatchReport, options: &ExportOptions, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("creating {}", path.display()), e))?;
    write_csv(report, options, file)?;
    info!(path = %path.display(), rows = report.n_rows(), "wrote CSV results");
    Ok(())
}

fn xlsx_err(e: XlsxError) -> Error {
    Error::Export {
        message: format!("spreadsheet write failed: {e}"),
    }
}

/// Cell values that parse as finite numbers are written as numbers.
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, value: &str) -> std::result::Result<(), XlsxError> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => sheet.write_number(row, col, n).map(|_| ()),
        _ => sheet.write_string(row, col, value).map(|_| ()),
    }
}

/// Worksheet column index, refusing tables wider than a sheet can hold.
fn sheet_column(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| Error::Export {
        message: format!("column {} exceeds the spreadsheet column limit", index + 1),
    })
}

fn sheet_row(index: usize) -> Result<u32> {
    u32::try_from(index).map_err(|_| Error::Export {
        message: format!("row {index} exceeds the spreadsheet row limit"),
    })
}

fn build_workbook(report: &BatchReport, options: &ExportOptions) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(&options.sheet_name).map_err(xlsx_err)?;

    let headers = options.headers(report);
    let label_col = sheet_column(report.table().n_cols())?;
    sheet_column(headers.len() - 1)?;
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, sheet_column(col)?, header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (i, (cells, score)) in report.iter().enumerate() {
        let row = sheet_row(i + 1)?;
        for (col, value) in cells.iter().enumerate() {
            write_cell(sheet, row, sheet_column(col)?, value).map_err(xlsx_err)?;
        }
        sheet
            .write_number(row, label_col, score.label as f64)
            .map_err(xlsx_err)?;
        if let Some(p) = score.probability {
            sheet.write_number(row, label_col + 1, p).map_err(xlsx_err)?;
        }
    }

    Ok(workbook)
}

/// Write the augmented table as a single-sheet `.xlsx` workbook.
pub fn write_xlsx(report: &BatchReport, options: &ExportOptions, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook(report, options)?;
    workbook.save(path).map_err(xlsx_err)?;
    info!(path = %path.display(), sheet = %options.sheet_name, rows = report.n_rows(), "wrote spreadsheet results");
    Ok(())
}

/// Render the workbook in memory.
pub fn xlsx_bytes(report: &BatchReport, options: &ExportOptions) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(report, options)?;
    workbook.save_to_buffer().map_err(xlsx_err)
}
