//! Label text composition

use crate::config::LabelConfig;
use crate::constants::{DEFAULT_PAPER_ID_PREFIX, MAX_LABEL_LINES};
use crate::services::AddressSplitter;
use crate::types::{LabelText, Record};
use label_types::{ColumnSchema, ProductType};

/// Turns source records into label text for one product type
#[derive(Debug, Clone)]
pub struct LabelComposer {
    product_type: ProductType,
    schema: ColumnSchema,
    splitter: AddressSplitter,
    id_prefix: String,
}

impl LabelComposer {
    pub fn new(product_type: ProductType, schema: ColumnSchema) -> Self {
        Self {
            product_type,
            schema,
            splitter: AddressSplitter::default(),
            id_prefix: DEFAULT_PAPER_ID_PREFIX.to_string(),
        }
    }

    /// Composer using the schema and limits from configuration
    pub fn from_config(config: &LabelConfig, product_type: ProductType) -> Self {
        Self {
            product_type,
            schema: config.schema_for(product_type),
            splitter: AddressSplitter::new(config.address.max_line_length),
            id_prefix: config.paper_id_prefix.clone(),
        }
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Compose the printed lines for one record.
    ///
    /// Order is name, address line(s), phones, identifier. Blank lines are
    /// dropped and at most six lines are kept.
    pub fn compose(&self, record: &Record) -> LabelText {
        let fields = record.extract(&self.schema);
        let identifier = self.format_identifier(&fields.id);

        let mut lines = vec![fields.name];
        lines.extend(self.splitter.split(&fields.address));
        if !fields.phone1.is_empty() {
            lines.push(fields.phone1);
        }
        if !fields.phone2.is_empty() {
            lines.push(fields.phone2);
        }
        lines.push(identifier);

        lines.retain(|line| !line.trim().is_empty());
        lines.truncate(MAX_LABEL_LINES);

        LabelText { lines }
    }

    /// Apply the product's identifier convention
    pub fn format_identifier(&self, id: &str) -> String {
        if self.product_type.formats_identifier() {
            format_paper_id(id, &self.id_prefix)
        } else {
            id.to_string()
        }
    }
}

/// `7` and `0007` both become `P - 0007`; anything non-numeric is untouched
pub fn format_paper_id(id: &str, prefix: &str) -> String {
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return id.to_string();
    }

    let digits = id.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    format!("{}{:0>4}", prefix, digits)
}
