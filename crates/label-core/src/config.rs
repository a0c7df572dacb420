//! Configuration management for the label workflow
//!
//! Values are layered: built-in defaults, then an optional config file
//! (JSON or TOML, picked by extension), then `LABELS__*` environment
//! variables, e.g. `LABELS__ADDRESS__MAX_LINE_LENGTH=34`.

use serde::{Deserialize, Serialize};
use crate::constants::{DEFAULT_MAX_ADDRESS_LINE_LENGTH, DEFAULT_OUTPUT_FILE_NAME, DEFAULT_PAPER_ID_PREFIX};
use crate::error::{LabelError, Result};
use config::{Config, Environment, File, FileFormat};
use label_types::{ColumnSchema, ProductType};
use std::path::Path;

const ENV_PREFIX: &str = "LABELS";
const ENV_SEPARATOR: &str = "__";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub columns: ColumnsConfig,

    #[serde(default)]
    pub address: AddressConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default = "default_paper_id_prefix")]
    pub paper_id_prefix: String,
}

/// Column schema per product type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnsConfig {
    #[serde(default = "default_theory_schema")]
    pub theory: ColumnSchema,

    #[serde(default = "default_paper_schema")]
    pub paper: ColumnSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressConfig {
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(alias = "filename", default = "default_file_name")]
    pub file_name: String,
}

// Default functions
fn default_theory_schema() -> ColumnSchema {
    ProductType::Theory.default_schema()
}

fn default_paper_schema() -> ColumnSchema {
    ProductType::Paper.default_schema()
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_ADDRESS_LINE_LENGTH
}

fn default_file_name() -> String {
    DEFAULT_OUTPUT_FILE_NAME.to_string()
}

fn default_paper_id_prefix() -> String {
    DEFAULT_PAPER_ID_PREFIX.to_string()
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            theory: default_theory_schema(),
            paper: default_paper_schema(),
        }
    }
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            columns: ColumnsConfig::default(),
            address: AddressConfig::default(),
            output: OutputConfig::default(),
            paper_id_prefix: default_paper_id_prefix(),
        }
    }
}

impl LabelConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(LabelError::Config(format!(
                    "Failed to read config file: {} does not exist",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| LabelError::Config(format!("Failed to load config: {}", e)))?;

        Self::from_settings(settings)
    }

    /// Load configuration from a file, without environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()
            .map_err(|e| LabelError::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;

        Self::from_settings(settings)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()
            .map_err(|e| LabelError::Config(format!("Failed to parse config: {}", e)))?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self> {
        let config: LabelConfig = settings
            .try_deserialize()
            .map_err(|e| LabelError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Column schema for the given product type
    pub fn schema_for(&self, product_type: ProductType) -> ColumnSchema {
        match product_type {
            ProductType::Theory => self.columns.theory,
            ProductType::Paper => self.columns.paper,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.address.max_line_length == 0 {
            return Err(LabelError::Config("address.max_line_length must be greater than zero".to_string()));
        }

        if self.output.file_name.trim().is_empty() {
            return Err(LabelError::Config("output.file_name is required".to_string()));
        }

        for product_type in ProductType::ALL {
            self.schema_for(product_type).validate().map_err(|e| {
                LabelError::Config(format!("columns.{}: {}", product_type, e))
            })?;
        }

        Ok(())
    }
}
