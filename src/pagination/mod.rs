//! Pagination module
//!
//! Supports: offset pages, hypermedia pages
//!
//! # Overview
//!
//! Pages are 1-indexed and map onto a half-open range of a zero-indexed
//! dataset. Out-of-range pages are not errors; they come back empty. A
//! [`HyperPage`] wraps a page with its position in the whole sequence.
//!
//! The `next_page` and `prev_page` links use strict comparisons
//! (`page + 1 < total_pages` and `page - 1 > 1`). The second page therefore
//! carries no `prev_page` and the second-to-last page carries no `next_page`.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{index_range, total_pages, HyperPage, PageRequest};
