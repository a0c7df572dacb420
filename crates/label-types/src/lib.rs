//! Shared types for the label workflow

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product line a label run is printed for.
///
/// The product type decides which column schema applies to the uploaded
/// table and whether identifiers are reformatted before printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Student labels (Type A)
    #[default]
    Theory,
    /// Product labels (Type B)
    Paper,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Theory, ProductType::Paper];

    /// Value used on the command line and in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Paper => "paper",
        }
    }

    /// Human readable name shown to the operator
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Theory => "Theory (Student Labels)",
            Self::Paper => "Paper (Product Labels)",
        }
    }

    /// Column positions used when no configuration overrides them
    pub fn default_schema(&self) -> ColumnSchema {
        match self {
            Self::Theory => ColumnSchema::THEORY,
            Self::Paper => ColumnSchema::PAPER,
        }
    }

    /// Whether purely numeric identifiers get the `P - 0001` treatment
    pub fn formats_identifier(&self) -> bool {
        matches!(self, Self::Paper)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = LabelTypesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "theory" => Ok(Self::Theory),
            "paper" => Ok(Self::Paper),
            other => Err(LabelTypesError::InvalidProductType(other.to_string())),
        }
    }
}

/// Named column positions of a source table.
///
/// Source files carry no header row, so every field is addressed by its
/// zero-based column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub id: usize,
    pub name: usize,
    pub address: usize,
    pub phone1: usize,
    pub phone2: usize,
}

impl ColumnSchema {
    pub const THEORY: ColumnSchema = ColumnSchema {
        id: 0,
        name: 2,
        address: 3,
        phone1: 8,
        phone2: 9,
    };

    pub const PAPER: ColumnSchema = ColumnSchema {
        id: 0,
        name: 2,
        address: 3,
        phone1: 7,
        phone2: 8,
    };

    /// Positions in (id, name, address, phone1, phone2) order
    pub fn positions(&self) -> [usize; 5] {
        [self.id, self.name, self.address, self.phone1, self.phone2]
    }

    /// Every field must read from its own column
    pub fn validate(&self) -> Result<()> {
        let positions = self.positions();
        for (i, a) in positions.iter().enumerate() {
            if positions[i + 1..].contains(a) {
                return Err(LabelTypesError::InvalidSchema(format!(
                    "column {} is mapped to more than one field",
                    a
                )));
            }
        }
        Ok(())
    }
}

/// Errors raised while building shared types
#[derive(Debug, thiserror::Error)]
pub enum LabelTypesError {
    #[error("Unknown product type: {0} (expected 'theory' or 'paper')")]
    InvalidProductType(String),

    #[error("Invalid column schema: {0}")]
    InvalidSchema(String),
}

pub type Result<T> = std::result::Result<T, LabelTypesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_parsing() {
        assert_eq!("theory".parse::<ProductType>().unwrap(), ProductType::Theory);
        assert_eq!(" Paper ".parse::<ProductType>().unwrap(), ProductType::Paper);
        assert!("poster".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_default_schemas() {
        assert_eq!(ProductType::Theory.default_schema().positions(), [0, 2, 3, 8, 9]);
        assert_eq!(ProductType::Paper.default_schema().positions(), [0, 2, 3, 7, 8]);
        assert!(ProductType::Paper.formats_identifier());
        assert!(!ProductType::Theory.formats_identifier());
    }

    #[test]
    fn test_schema_rejects_shared_columns() {
        let schema = ColumnSchema { phone2: 8, ..ColumnSchema::PAPER };
        assert_eq!(schema.positions(), [0, 2, 3, 7, 8]);
        assert!(schema.validate().is_ok());

        let broken = ColumnSchema { phone2: 7, ..ColumnSchema::PAPER };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_product_type_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&ProductType::Paper).unwrap(), "\"paper\"");
        let parsed: ProductType = serde_json::from_str("\"theory\"").unwrap();
        assert_eq!(parsed, ProductType::Theory);
        assert_eq!(ProductType::Paper.to_string(), ProductType::Paper.as_str());
    }
}
