//! Table and identifier-list sources
//!
//! Uploads arrive as raw bytes plus the original file name; the extension
//! decides which reader parses them.

pub mod csv_source;
pub mod id_list;
pub mod spreadsheet;

pub use csv_source::read_csv;
pub use id_list::{parse_id_list, read_id_list_file};
pub use spreadsheet::read_spreadsheet;

use crate::error::{LabelError, Result};
use crate::types::Table;
use std::path::Path;

/// Supported table formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Spreadsheet,
}

impl SourceFormat {
    const SPREADSHEET_EXTENSIONS: [&'static str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

    /// Pick the format from a file name's extension
    pub fn detect(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if extension == "csv" {
            Ok(Self::Csv)
        } else if Self::SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
            Ok(Self::Spreadsheet)
        } else {
            Err(LabelError::read(
                file_name,
                "unsupported file type (expected .csv, .xlsx or .xls)",
            ))
        }
    }
}

/// Parse an uploaded table
pub fn read_table_bytes(file_name: &str, bytes: &[u8]) -> Result<Table> {
    let table = match SourceFormat::detect(file_name)? {
        SourceFormat::Csv => read_csv(file_name, bytes)?,
        SourceFormat::Spreadsheet => read_spreadsheet(file_name, bytes)?,
    };

    log::info!("Loaded {} rows from {}", table.len(), file_name);
    Ok(table)
}

/// Read and parse a table from disk
pub fn read_table_file<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LabelError::read(path.display().to_string(), "invalid file name"))?;

    let bytes = std::fs::read(path).map_err(|e| LabelError::read(path.display().to_string(), e))?;
    read_table_bytes(file_name, &bytes)
}
