//! Paginator over a dataset provider

use super::types::{index_range, total_pages, HyperPage, PageRequest};
use crate::dataset::DatasetProvider;
use crate::error::Result;

/// Serves pages out of a dataset provider
///
/// Holds no state between calls: every page is computed from the request
/// and the loaded dataset, so identical requests give identical pages.
///
/// # Example
///
/// ```
/// use hyperpage::dataset::MemoryDataset;
/// use hyperpage::pagination::Paginator;
///
/// let paginator = Paginator::new(MemoryDataset::new((0..12).collect::<Vec<u32>>()));
///
/// assert_eq!(paginator.get_page(3, 5).unwrap(), &[10, 11]);
///
/// let hyper = paginator.get_hyper(1, 5).unwrap();
/// assert_eq!(hyper.next_page, Some(2));
/// assert_eq!(hyper.total_pages, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Paginator<P> {
    provider: P,
}

impl<P: DatasetProvider> Paginator<P> {
    /// Create a paginator over a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Return the underlying provider
    pub fn into_inner(self) -> P {
        self.provider
    }

    /// Records on `page` when pages hold `page_size` records
    ///
    /// Fails with `InvalidArgument` if either value is zero, before the
    /// dataset is touched. A page past the end is empty, not an error.
    pub fn get_page(&self, page: usize, page_size: usize) -> Result<&[P::Record]> {
        self.page(PageRequest::new(page, page_size)?)
    }

    /// Records for an already validated request
    pub fn page(&self, request: PageRequest) -> Result<&[P::Record]> {
        let dataset = self.provider.load()?;
        Ok(slice_page(dataset, request))
    }

    /// Page `page` wrapped with navigation metadata
    pub fn get_hyper(&self, page: usize, page_size: usize) -> Result<HyperPage<'_, P::Record>> {
        self.hyper(PageRequest::new(page, page_size)?)
    }

    /// Hypermedia page for an already validated request
    pub fn hyper(&self, request: PageRequest) -> Result<HyperPage<'_, P::Record>> {
        let dataset = self.provider.load()?;
        let data = slice_page(dataset, request);
        Ok(HyperPage::assemble(request, data, dataset.len()))
    }

    /// Number of pages of `page_size` records in the dataset
    pub fn total_pages(&self, page_size: usize) -> Result<usize> {
        let request = PageRequest::new(1, page_size)?;
        Ok(total_pages(self.provider.length()?, request.page_size()))
    }
}

/// Clamp the request's range to the dataset and borrow that slice
fn slice_page<R>(dataset: &[R], request: PageRequest) -> &[R] {
    let len = dataset.len();
    let (start, end) = index_range(request.page(), request.page_size());
    let end = end.min(len);
    let start = start.min(end);

    tracing::debug!(
        page = request.page(),
        page_size = request.page_size(),
        start,
        end,
        "Serving page"
    );

    &dataset[start..end]
}
