//! Error types for the label workflow

use thiserror::Error;

/// Main error type for all label operations
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error reading file {file}: {reason}")]
    Read { file: String, reason: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error(transparent)]
    Types(#[from] label_types::LabelTypesError),
}

impl LabelError {
    /// Build a read error for an uploaded or referenced file
    pub fn read(file: impl Into<String>, reason: impl ToString) -> Self {
        Self::Read {
            file: file.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for label operations
pub type Result<T> = std::result::Result<T, LabelError>;
