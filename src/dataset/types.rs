//! Dataset provider trait

use crate::error::Result;
use std::sync::Arc;

/// Source of an ordered, immutable sequence of records
///
/// Implementations must return the same sequence from every successful
/// `load`; the paginator relies on this for idempotent pages.
pub trait DatasetProvider: Send + Sync {
    /// Row type yielded by this provider
    type Record: Send + Sync;

    /// Borrow the full dataset, loading it first if needed
    fn load(&self) -> Result<&[Self::Record]>;

    /// Number of records in the dataset
    fn length(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }
}

impl<P: DatasetProvider + ?Sized> DatasetProvider for Arc<P> {
    type Record = P::Record;

    fn load(&self) -> Result<&[Self::Record]> {
        (**self).load()
    }

    fn length(&self) -> Result<usize> {
        (**self).length()
    }
}

impl<P: DatasetProvider + ?Sized> DatasetProvider for &P {
    type Record = P::Record;

    fn load(&self) -> Result<&[Self::Record]> {
        (**self).load()
    }

    fn length(&self) -> Result<usize> {
        (**self).length()
    }
}
