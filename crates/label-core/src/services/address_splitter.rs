//! Address line splitting

use crate::constants::DEFAULT_MAX_ADDRESS_LINE_LENGTH;

/// Splits long addresses over two label lines at a comma
#[derive(Debug, Clone, Copy)]
pub struct AddressSplitter {
    max_line_length: usize,
}

impl AddressSplitter {
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Split an address into one or two lines.
    ///
    /// Blank input gives a single empty line. Text within the limit is
    /// returned as is. Longer text is split after the last comma at or before
    /// the overflow point (falling back to the last comma anywhere); without
    /// any comma the long line is kept whole.
    pub fn split(&self, address: &str) -> Vec<String> {
        let address = address.trim();
        if address.is_empty() {
            return vec![String::new()];
        }

        if address.chars().count() <= self.max_line_length {
            return vec![address.to_string()];
        }

        let split_at = self
            .last_comma_within_limit(address)
            .or_else(|| address.rfind(','));

        match split_at {
            Some(comma) => {
                let (first, second) = address.split_at(comma + 1);
                vec![first.trim().to_string(), second.trim().to_string()]
            }
            None => vec![address.to_string()],
        }
    }

    /// Byte offset of the last comma among the first `max + 1` characters
    fn last_comma_within_limit(&self, address: &str) -> Option<usize> {
        address
            .char_indices()
            .take(self.max_line_length + 1)
            .filter(|(_, c)| *c == ',')
            .map(|(i, _)| i)
            .last()
    }
}

impl Default for AddressSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ADDRESS_LINE_LENGTH)
    }
}
