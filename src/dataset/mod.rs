//! Dataset provider module
//!
//! Supports: delimited files loaded once on first access, in-memory vectors
//!
//! # Overview
//!
//! A dataset provider owns an ordered, immutable, zero-indexed sequence of
//! records. Paginators only ever borrow it. File-backed providers load
//! lazily behind a one-time initialization guard, so concurrent first
//! readers trigger a single load and later reads take no lock.

mod providers;
mod types;

pub use providers::{CsvDatasetProvider, MemoryDataset};
pub use types::DatasetProvider;
