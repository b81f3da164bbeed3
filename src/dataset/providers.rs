//! Dataset provider implementations

use super::types::DatasetProvider;
use crate::config::DatasetConfig;
use crate::decode::{CsvDecoder, DecodedTable};
use crate::error::{Error, Result};
use crate::types::Record;
use once_cell::sync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// CSV File Provider
// ============================================================================

/// File-backed provider for delimited text with a header row
///
/// The file is read and decoded on first access. A failed load is not
/// cached: the error goes to the caller and the next access reads again.
#[derive(Debug)]
pub struct CsvDatasetProvider {
    /// Path to the source file
    path: PathBuf,
    /// Decoder used for the file contents
    decoder: CsvDecoder,
    /// Decoded file, set once
    table: OnceCell<DecodedTable>,
}

impl CsvDatasetProvider {
    /// Create a provider for a comma-separated file with a header row
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_decoder(path, CsvDecoder::new())
    }

    /// Create a provider with a custom decoder
    pub fn with_decoder(path: impl AsRef<Path>, decoder: CsvDecoder) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            decoder,
            table: OnceCell::new(),
        }
    }

    /// Create a provider from the `dataset` section of a config file
    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        config.decoder.validate()?;
        Ok(Self::with_decoder(
            &config.path,
            CsvDecoder::from_config(&config.decoder),
        ))
    }

    /// Path of the source file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file has been loaded
    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Column names, loading the file first if needed
    ///
    /// Returns `None` when the decoder was configured without a header row.
    pub fn header(&self) -> Result<Option<&[String]>> {
        Ok(self.table()?.header.as_deref())
    }

    fn table(&self) -> Result<&DecodedTable> {
        self.table.get_or_try_init(|| self.read_table())
    }

    fn read_table(&self) -> Result<DecodedTable> {
        tracing::debug!(path = %self.path.display(), "Loading dataset");

        let bytes = fs::read(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: self.path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let body = String::from_utf8(bytes).map_err(|e| {
            let valid = e.utf8_error().valid_up_to();
            let line = e.as_bytes()[..valid].iter().filter(|b| **b == b'\n').count() + 1;
            Error::format(line, "invalid UTF-8")
        })?;

        let table = self.decoder.decode(&body)?;
        tracing::info!(
            path = %self.path.display(),
            records = table.len(),
            "Loaded dataset"
        );
        Ok(table)
    }
}

impl DatasetProvider for CsvDatasetProvider {
    type Record = Record;

    fn load(&self) -> Result<&[Record]> {
        Ok(&self.table()?.records)
    }
}

// ============================================================================
// In-Memory Provider
// ============================================================================

/// Provider over records that are already in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDataset<R> {
    records: Vec<R>,
}

impl<R> MemoryDataset<R> {
    /// Wrap a vector of records
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Return the wrapped records
    pub fn into_inner(self) -> Vec<R> {
        self.records
    }
}

impl<R> From<Vec<R>> for MemoryDataset<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl<R> FromIterator<R> for MemoryDataset<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R: Send + Sync> DatasetProvider for MemoryDataset<R> {
    type Record = R;

    fn load(&self) -> Result<&[R]> {
        Ok(&self.records)
    }

    fn length(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}
