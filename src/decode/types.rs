//! Decoder types
//!
//! Defines the decoder configuration and decoded output.

use crate::error::{Error, Result};
use crate::types::Record;
use serde::{Deserialize, Serialize};

/// Configuration for decoding delimited text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Field delimiter (default: comma)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Whether the first row is a header
    #[serde(default = "default_has_header")]
    pub has_header: bool,
    /// Reject rows whose field count differs from the header (or, without a
    /// header, from the first row)
    #[serde(default)]
    pub strict_columns: bool,
}

fn default_delimiter() -> char {
    ','
}

fn default_has_header() -> bool {
    true
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: default_has_header(),
            strict_columns: false,
        }
    }
}

impl DecoderConfig {
    /// Create a CSV decoder config (comma, header row)
    pub fn csv() -> Self {
        Self::default()
    }

    /// Create a TSV decoder config (tab, header row)
    pub fn tsv() -> Self {
        Self {
            delimiter: '\t',
            ..Default::default()
        }
    }

    /// Create a decoder config with custom delimiter
    pub fn with_delimiter(delimiter: char, has_header: bool) -> Self {
        Self {
            delimiter,
            has_header,
            ..Default::default()
        }
    }

    /// Enable or disable strict column counting
    #[must_use]
    pub fn strict(mut self, strict_columns: bool) -> Self {
        self.strict_columns = strict_columns;
        self
    }

    /// Check that the delimiter can be told apart from quoting and line breaks
    pub fn validate(&self) -> Result<()> {
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(Error::invalid_config(
                "delimiter",
                format!("{:?} cannot be used as a field delimiter", self.delimiter),
            ));
        }
        Ok(())
    }
}

/// Decoded contents of a delimited file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTable {
    /// Column names from the header row, if the source has one
    pub header: Option<Vec<String>>,
    /// Data rows in source order
    pub records: Vec<Record>,
}

impl DecodedTable {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
