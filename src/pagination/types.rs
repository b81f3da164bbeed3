//! Pagination types and index arithmetic

use crate::config::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use serde::Serialize;
use std::ops::Range;

/// Start and end offsets of a 1-indexed page in a zero-indexed sequence
///
/// Returns `((page - 1) * page_size, page * page_size)`. The range is not
/// checked against any dataset length. Arithmetic saturates at `usize::MAX`.
pub fn index_range(page: usize, page_size: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);
    (start, end)
}

/// Number of pages needed to cover `len` records, `ceil(len / page_size)`
///
/// `page_size` must be non-zero.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

// ============================================================================
// Page Request
// ============================================================================

/// A validated page request
///
/// Both the page number and the page size are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Validate a page number and page size
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        Ok(Self {
            page: positive("page", page)?,
            page_size: positive("page_size", page_size)?,
        })
    }

    /// Validate signed inputs, as received from a command line or query string
    pub fn from_signed(page: i64, page_size: i64) -> Result<Self> {
        let page = usize::try_from(page).map_err(|_| not_positive("page", page))?;
        let page_size =
            usize::try_from(page_size).map_err(|_| not_positive("page_size", page_size))?;
        Self::new(page, page_size)
    }

    /// 1-indexed page number
    pub fn page(&self) -> usize {
        self.page
    }

    /// Requested number of records per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Offsets covered by this page, before clamping to a dataset
    pub fn range(&self) -> Range<usize> {
        let (start, end) = index_range(self.page, self.page_size);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(not_positive(name, value));
    }
    Ok(value)
}

fn not_positive(name: &str, value: impl std::fmt::Display) -> Error {
    Error::invalid_argument(name, format!("must be a positive integer, got {value}"))
}

// ============================================================================
// Hypermedia Page
// ============================================================================

/// A page that describes its own position in the dataset
///
/// Serializes with absent links as `null`:
///
/// ```json
/// {"page_size": 5, "page": 1, "data": [...], "next_page": 2, "prev_page": null, "total_pages": 3}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HyperPage<'a, R> {
    /// Number of records actually returned
    pub page_size: usize,
    /// Requested page number
    pub page: usize,
    /// Records on this page
    pub data: &'a [R],
    /// Next page number, if `page + 1 < total_pages`
    pub next_page: Option<usize>,
    /// Previous page number, if `page - 1 > 1`
    pub prev_page: Option<usize>,
    /// `ceil(N / requested page size)`
    pub total_pages: usize,
}

impl<'a, R> HyperPage<'a, R> {
    /// Wrap a page slice with navigation for a dataset of `dataset_len` records
    pub fn assemble(request: PageRequest, data: &'a [R], dataset_len: usize) -> Self {
        let total_pages = total_pages(dataset_len, request.page_size());
        let page = request.page();

        Self {
            page_size: data.len(),
            page,
            data,
            next_page: page.checked_add(1).filter(|next| *next < total_pages),
            prev_page: page.checked_sub(1).filter(|prev| *prev > 1),
            total_pages,
        }
    }
}
