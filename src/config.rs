//! Configuration types for the pager
//!
//! A pager is configured from a small YAML file. Every field is optional:
//!
//! ```yaml
//! dataset:
//!   path: Popular_Baby_Names.csv
//!   delimiter: ","
//!   has_header: true
//!   strict_columns: false
//! defaults:
//!   page: 1
//!   page_size: 10
//! log_level: INFO
//! ```

use crate::decode::DecoderConfig;
use crate::error::{Error, Result};
use crate::pagination::PageRequest;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Data file used when none is configured
pub const DEFAULT_DATA_FILE: &str = "Popular_Baby_Names.csv";

/// Page number used when a request does not name one
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when a request does not name one
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete pager configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Dataset source
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Request defaults
    #[serde(default)]
    pub defaults: PageDefaults,

    /// Log level for the command-line wrapper
    #[serde(default)]
    pub log_level: LogLevel,
}

impl PagerConfig {
    /// Load and validate a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a config from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system cannot
    pub fn validate(&self) -> Result<()> {
        self.dataset.decoder.validate()?;
        self.defaults.to_request().map_err(|e| match e {
            Error::InvalidArgument { name, message } => {
                Error::invalid_config(format!("defaults.{name}"), message)
            }
            other => other,
        })?;
        Ok(())
    }
}

// ============================================================================
// Dataset Config
// ============================================================================

/// Where the dataset lives and how to decode it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the delimited file
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Decoding options
    #[serde(flatten)]
    pub decoder: DecoderConfig,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            decoder: DecoderConfig::default(),
        }
    }
}

// ============================================================================
// Request Defaults
// ============================================================================

/// Page and page size used when the caller leaves them out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDefaults {
    /// Page number
    #[serde(default = "default_page")]
    pub page: usize,

    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageDefaults {
    /// Build a request, overriding either value
    pub fn request(&self, page: Option<usize>, page_size: Option<usize>) -> Result<PageRequest> {
        PageRequest::new(
            page.unwrap_or(self.page),
            page_size.unwrap_or(self.page_size),
        )
    }

    /// Build the default request
    pub fn to_request(&self) -> Result<PageRequest> {
        self.request(None, None)
    }
}
