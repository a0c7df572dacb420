//! Common types used throughout the label workflow

use serde::{Deserialize, Serialize};
use label_types::ColumnSchema;

/// One row of source data, addressed by column position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at `position`, or an empty string for short rows
    pub fn field(&self, position: usize) -> &str {
        self.fields.get(position).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Pull the label fields out of the row using a column schema
    pub fn extract(&self, schema: &ColumnSchema) -> LabelFields {
        LabelFields {
            id: self.field(schema.id).trim().to_string(),
            name: self.field(schema.name).trim().to_string(),
            address: self.field(schema.address).trim().to_string(),
            phone1: self.field(schema.phone1).trim().to_string(),
            phone2: self.field(schema.phone2).trim().to_string(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Trimmed label fields of a single record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFields {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone1: String,
    pub phone2: String,
}

/// A loaded source table, rows in file order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub source_name: String,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(source_name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            source_name: source_name.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` rows, for showing the operator what was uploaded
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Identifier column values in row order
    pub fn column_values(&self, position: usize) -> Vec<String> {
        self.records.iter().map(|r| r.field(position).to_string()).collect()
    }
}

/// Composed text of one label; the first line is printed bold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelText {
    pub lines: Vec<String>,
}

impl LabelText {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Emphasized line (the recipient name when present)
    pub fn heading(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

impl std::fmt::Display for LabelText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// A finished label sheet held in memory until delivered
#[derive(Debug, Clone)]
pub struct LabelDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub label_count: usize,
}

impl LabelDocument {
    /// Check the PDF header
    pub fn is_pdf(&self) -> bool {
        self.bytes.len() >= 4 && self.bytes.starts_with(b"%PDF")
    }
}
