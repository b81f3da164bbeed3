//! Dataset decoder module
//!
//! Supports: delimited text (CSV, TSV, any single-character delimiter)
//!
//! # Overview
//!
//! The decode module turns the raw text of a tabular file into ordered
//! [`Record`](crate::types::Record)s. The header row, when present, is split
//! off and never becomes part of the dataset.

mod decoders;
mod types;

pub use decoders::CsvDecoder;
pub use types::{DecodedTable, DecoderConfig};

#[cfg(test)]
mod tests;
