//! Excel / OpenDocument table reader

use crate::error::{LabelError, Result};
use crate::types::{Record, Table};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;

/// Parse the first worksheet of a workbook, without a header row
pub fn read_spreadsheet(source_name: &str, bytes: &[u8]) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| LabelError::read(source_name, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LabelError::read(source_name, "workbook has no worksheets"))?
        .map_err(|e| LabelError::read(source_name, e))?;

    let records = range_to_records(&range);
    log::debug!("Parsed {} worksheet rows from {}", records.len(), source_name);
    Ok(Table::new(source_name, records))
}

/// Convert a used range to records, keeping sheet column positions
pub(crate) fn range_to_records(range: &Range<Data>) -> Vec<Record> {
    // The used range starts at the first non-empty cell
    let leading_columns = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    range
        .rows()
        .map(|row| {
            std::iter::repeat(String::new())
                .take(leading_columns)
                .chain(row.iter().map(cell_text))
                .collect()
        })
        .collect()
}

/// Render a cell the way the operator typed it
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
