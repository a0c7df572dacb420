//! Interactive label session
//!
//! Holds everything an operator has chosen so far: the product type, the
//! uploaded table and the requested identifiers. Each call recomputes from
//! that state; nothing is cached between calls.

use crate::config::LabelConfig;
use crate::constants::TABLE_PREVIEW_ROWS;
use crate::error::{LabelError, Result};
use crate::render::render_document;
use crate::services::{select_records, LabelComposer, Selection};
use crate::sources::{parse_id_list, read_table_bytes};
use crate::types::{LabelDocument, LabelText, Record, Table};
use label_types::{ColumnSchema, ProductType};

pub const NOTHING_SELECTED_MESSAGE: &str = "Please select or upload at least one ID.";
pub const NO_MATCHES_MESSAGE: &str = "No matching IDs found.";

/// Result of a generate request
#[derive(Debug, Clone)]
pub enum GenerateOutcome {
    NothingSelected,
    NoMatches,
    Document(LabelDocument),
}

impl GenerateOutcome {
    /// Operator-facing summary of the outcome
    pub fn message(&self) -> String {
        match self {
            Self::NothingSelected => NOTHING_SELECTED_MESSAGE.to_string(),
            Self::NoMatches => NO_MATCHES_MESSAGE.to_string(),
            Self::Document(document) => matches_message(document.label_count),
        }
    }

    pub fn document(&self) -> Option<&LabelDocument> {
        match self {
            Self::Document(document) => Some(document),
            _ => None,
        }
    }

    pub fn into_document(self) -> Option<LabelDocument> {
        match self {
            Self::Document(document) => Some(document),
            _ => None,
        }
    }
}

pub fn matches_message(count: usize) -> String {
    format!("Found {} matching records.", count)
}

/// One operator's working state
#[derive(Debug, Clone)]
pub struct LabelSession {
    config: LabelConfig,
    product_type: ProductType,
    table: Option<Table>,
    selected_ids: Vec<String>,
}

impl LabelSession {
    pub fn new(config: LabelConfig) -> Self {
        Self {
            config,
            product_type: ProductType::default(),
            table: None,
            selected_ids: Vec::new(),
        }
    }

    pub fn with_product_type(config: LabelConfig, product_type: ProductType) -> Self {
        Self {
            product_type,
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn set_product_type(&mut self, product_type: ProductType) {
        if product_type != self.product_type {
            log::info!("Product type changed: {} -> {}", self.product_type, product_type);
        }
        self.product_type = product_type;
    }

    /// Column schema of the current product type
    pub fn schema(&self) -> ColumnSchema {
        self.config.schema_for(self.product_type)
    }

    pub fn composer(&self) -> LabelComposer {
        LabelComposer::from_config(&self.config, self.product_type)
    }

    /// Load an uploaded table, replacing the current one.
    ///
    /// On failure the previous table stays in place.
    pub fn upload(&mut self, file_name: &str, bytes: &[u8]) -> Result<usize> {
        let table = read_table_bytes(file_name, bytes)?;
        let rows = table.len();
        log::info!("File uploaded successfully: {} ({} rows)", file_name, rows);
        self.table = Some(table);
        Ok(rows)
    }

    /// Use an already loaded table
    pub fn set_table(&mut self, table: Table) {
        self.table = Some(table);
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    fn require_table(&self) -> Result<&Table> {
        self.table
            .as_ref()
            .ok_or_else(|| LabelError::Validation("Upload your file to begin.".to_string()))
    }

    /// First rows of the loaded table
    pub fn table_preview(&self) -> Result<&[Record]> {
        Ok(self.require_table()?.head(TABLE_PREVIEW_ROWS))
    }

    /// Identifier column of every row, in source order
    pub fn available_ids(&self) -> Result<Vec<String>> {
        let id_column = self.schema().id;
        Ok(self.require_table()?.column_values(id_column))
    }

    pub fn select_ids(&mut self, ids: Vec<String>) {
        self.selected_ids = ids;
    }

    /// Replace the selection with the contents of an id list file
    pub fn select_ids_from_text(&mut self, file_name: &str, bytes: &[u8]) -> Result<usize> {
        let ids = parse_id_list(file_name, bytes)?;
        let count = ids.len();
        self.selected_ids = ids;
        Ok(count)
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected_ids
    }

    pub fn selection(&self) -> Result<Selection> {
        let table = self.require_table()?;
        Ok(select_records(table, &self.selected_ids, self.schema().id))
    }

    /// Composed text of every selected label, in print order
    pub fn label_previews(&self) -> Result<Vec<LabelText>> {
        let composer = self.composer();
        Ok(self
            .selection()?
            .records()
            .iter()
            .map(|record| composer.compose(record))
            .collect())
    }

    pub fn generate(&self) -> Result<GenerateOutcome> {
        let outcome = match self.selection()? {
            Selection::NothingSelected => GenerateOutcome::NothingSelected,
            Selection::NoMatches => GenerateOutcome::NoMatches,
            Selection::Matches(records) => GenerateOutcome::Document(render_document(
                &records,
                &self.composer(),
                &self.config.output.file_name,
            )?),
        };

        log::info!("{}", outcome.message());
        Ok(outcome)
    }
}

impl Default for LabelSession {
    fn default() -> Self {
        Self::new(LabelConfig::default())
    }
}
