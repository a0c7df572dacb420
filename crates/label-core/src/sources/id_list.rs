//! Plain-text identifier lists, one id per line

use crate::error::{LabelError, Result};
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse an uploaded id list; blank lines are skipped and ids trimmed
pub fn parse_id_list(source_name: &str, bytes: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes).map_err(|e| LabelError::read(source_name, e))?;
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    let ids: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    log::debug!("Read {} ids from {}", ids.len(), source_name);
    Ok(ids)
}

/// Read an id list from disk
pub fn read_id_list_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| LabelError::read(name.clone(), e))?;
    parse_id_list(&name, &bytes)
}
