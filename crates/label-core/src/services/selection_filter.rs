//! Record selection by identifier

use crate::types::{Record, Table};

/// Outcome of filtering a table by requested identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No identifiers were requested; nothing was computed
    NothingSelected,
    /// Identifiers were requested but none matched a row
    NoMatches,
    /// Matching rows, grouped by request order
    Matches(Vec<Record>),
}

impl Selection {
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Matches(records) => records,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Pick the rows whose identifier column equals one of `ids`.
///
/// For each requested id, in request order, every matching row is taken in
/// source order. Duplicate rows stay duplicated.
pub fn select_records(table: &Table, ids: &[String], id_column: usize) -> Selection {
    if ids.is_empty() {
        return Selection::NothingSelected;
    }

    let matches: Vec<Record> = ids
        .iter()
        .flat_map(|id| {
            table
                .records
                .iter()
                .filter(move |record| record.field(id_column) == id.as_str())
                .cloned()
        })
        .collect();

    log::info!(
        "Selected {} rows for {} requested ids from {}",
        matches.len(),
        ids.len(),
        table.source_name
    );

    if matches.is_empty() {
        Selection::NoMatches
    } else {
        Selection::Matches(matches)
    }
}
