//! Record page sources.
//!
//! - [`PageSource`]: the read contract, one page per call
//! - [`MemorySource`] and [`FileSource`]: providers
//! - [`PageFetcher`]: runs reads on background threads for the TUI

use crate::model::error::SourceError;
use crate::model::{FetchError, PageIndex, PageResponse};
use std::path::PathBuf;

pub mod fetcher;
pub mod file;
pub mod memory;

pub use fetcher::PageFetcher;
pub use file::FileSource;
pub use memory::MemorySource;

/// A provider of fixed-size record pages.
///
/// Implementations are shared with fetch threads, hence `Send + Sync`.
pub trait PageSource: Send + Sync {
    /// Read one page. `total` in the response is the record count across all
    /// pages.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the page cannot be produced.
    fn fetch_page(&self, page: PageIndex) -> Result<PageResponse, FetchError>;

    /// Maximum number of records per page.
    fn page_size(&self) -> usize;
}

/// Open the configured data file.
///
/// # Errors
///
/// Returns `SourceError::NoInput` when no file is configured, otherwise any
/// error from [`FileSource::open`].
pub fn open_source(
    data_file: Option<PathBuf>,
    page_size: usize,
) -> Result<FileSource, SourceError> {
    match data_file {
        Some(path) => FileSource::open(path, page_size),
        None => Err(SourceError::NoInput),
    }
}
