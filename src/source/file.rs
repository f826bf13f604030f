//! File-backed page source.
//!
//! Reads a JSON array of records once at construction and serves pages out of
//! memory afterwards.

use super::memory::MemorySource;
use super::PageSource;
use crate::model::error::SourceError;
use crate::model::{FetchError, PageIndex, PageResponse, Record};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read-once file source.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    inner: MemorySource,
}

impl FileSource {
    /// Load all records from `path`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::FileNotFound` if the file does not exist,
    /// `SourceError::InvalidData` if it is not a JSON array of valid records,
    /// and `SourceError::Io` for other read failures.
    pub fn open(path: impl AsRef<Path>, page_size: usize) -> Result<Self, SourceError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SourceError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let records: Vec<Record> =
            serde_json::from_str(&contents).map_err(|e| SourceError::InvalidData {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), records = records.len(), "Loaded record file");

        Ok(Self {
            path: path.to_path_buf(),
            inner: MemorySource::new(records, page_size),
        })
    }
}

impl PageSource for FileSource {
    fn fetch_page(&self, page: PageIndex) -> Result<PageResponse, FetchError> {
        debug!(page = page.number(), path = %self.path.display(), "Serving page from file");
        self.inner.fetch_page(page)
    }

    fn page_size(&self) -> usize {
        self.inner.page_size()
    }
}
