// Decoding of tabular input (CSV text or spreadsheet workbooks) into rows
use crate::model::{RawRow, TableError};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Csv,
    Xlsx,
}

impl TableFormat {
    /// Workbook extensions decode through calamine, everything else as CSV.
    pub fn from_location(location: &str) -> Self {
        let ext = Path::new(location.split(['?', '#']).next().unwrap_or(location))
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => TableFormat::Xlsx,
            _ => TableFormat::Csv,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Xlsx => "xlsx",
        }
    }
}

/// Header cells of the first row, trimmed.
pub fn read_header_row(bytes: &[u8], format: TableFormat) -> Result<Vec<String>, TableError> {
    let grid = read_grid(bytes, format)?;
    let header = grid.into_iter().next().ok_or(TableError::MissingHeaderRow)?;
    Ok(header.into_iter().map(|h| h.trim().to_string()).collect())
}

/// Data rows keyed by the first row's headers. Short rows are padded with
/// empty strings and fully blank rows are skipped.
pub fn read_rows(bytes: &[u8], format: TableFormat) -> Result<Vec<RawRow>, TableError> {
    let mut grid = read_grid(bytes, format)?.into_iter();
    let headers = grid.next().ok_or(TableError::MissingHeaderRow)?;

    let rows = grid
        .filter(|cells| cells.iter().any(|c| !c.trim().is_empty()))
        .map(|cells| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| !h.trim().is_empty())
                .map(|(i, h)| (h.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect();
    Ok(rows)
}

fn read_grid(bytes: &[u8], format: TableFormat) -> Result<Vec<Vec<String>>, TableError> {
    match format {
        TableFormat::Csv => read_csv_grid(bytes),
        TableFormat::Xlsx => read_workbook_grid(bytes),
    }
}

fn read_csv_grid(bytes: &[u8]) -> Result<Vec<Vec<String>>, TableError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

fn read_workbook_grid(bytes: &[u8]) -> Result<Vec<Vec<String>>, TableError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(TableError::NoWorksheet)??;
    Ok(range_to_grid(&range))
}

fn range_to_grid(range: &Range<Data>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
