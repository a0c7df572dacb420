//! Label Core Library
//!
//! Business logic for the Sisenco label generator: loading tabular input,
//! selecting rows by identifier, composing label text and laying labels out
//! on A4 sheets as PDF.

pub mod config;
pub mod constants;
pub mod error;
pub mod paths;
pub mod render;
pub mod services;
pub mod session;
pub mod sources;
pub mod types;

// Re-export main types for easy access
pub use config::LabelConfig;
pub use error::{LabelError, Result};

pub use types::{LabelDocument, LabelFields, LabelText, Record, Table};

pub use services::{select_records, AddressSplitter, LabelComposer, Selection};

pub use render::{render_document, render_labels, LabelSink, PdfLabelSink};

pub use session::{GenerateOutcome, LabelSession};

pub use sources::{parse_id_list, read_id_list_file, read_table_bytes, read_table_file};

pub use label_types::{ColumnSchema, ProductType};
