//! # hyperpage
//!
//! Offset and hypermedia pagination over a static tabular dataset.
//!
//! ## Features
//!
//! - **Offset pages**: 1-indexed pages mapped onto a zero-indexed dataset
//! - **Hypermedia pages**: pages that carry next/prev page numbers and a total
//! - **Lazy datasets**: delimited files decoded once on first access
//! - **Generic records**: any provider's row type can be paginated
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hyperpage::{CsvDatasetProvider, Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let paginator = Paginator::new(CsvDatasetProvider::new("Popular_Baby_Names.csv"));
//!
//!     let rows = paginator.get_page(1, 10)?;
//!     println!("{} rows", rows.len());
//!
//!     let hyper = paginator.get_hyper(2, 10)?;
//!     println!("{}", serde_json::to_string(&hyper)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    Paginator                        │
//! │  get_page() → &[Record]    get_hyper() → HyperPage  │
//! └─────────────────────────────────────────────────────┘
//!                │                          │
//! ┌──────────────┴───────────┐  ┌───────────┴──────────┐
//! │      index_range()       │  │   DatasetProvider    │
//! │  (page, size) → [s, e)   │  │  CSV file │ Memory   │
//! └──────────────────────────┘  └──────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page arithmetic and the paginator
pub mod pagination;

/// Dataset providers
pub mod dataset;

/// Delimited text decoding
pub mod decode;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::PagerConfig;
pub use dataset::{CsvDatasetProvider, DatasetProvider, MemoryDataset};
pub use pagination::{index_range, HyperPage, PageRequest, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
