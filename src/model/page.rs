//! Page types: the unit the backing source hands out.

use super::error::FetchError;
use super::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ===== PageIndex =====

/// 0-based page index. Displayed and sent on the wire as 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PageIndex(usize);

impl PageIndex {
    /// The first page.
    pub const FIRST: PageIndex = PageIndex(0);

    /// From a 0-based index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Build from a 1-based page number. Returns `None` for 0.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    /// 0-based index.
    pub fn get(self) -> usize {
        self.0
    }

    /// 1-based page number (wire and display value).
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ===== PageResponse =====

/// Wire shape of a page read: `{ "data": [...], "total": N }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    /// Records of this page, at most one page size.
    pub data: Vec<Record>,
    /// Record count across all pages.
    pub total: usize,
}

// ===== FetchTicket =====

/// Identity of one issued page fetch.
///
/// `generation` increases with every request, so two tickets for the same page
/// issued at different times are still distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Issue order. Higher is newer.
    pub generation: u64,
    /// Page being fetched.
    pub page: PageIndex,
}

/// A completed fetch, tagged with the ticket it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Ticket the fetch was issued under.
    pub ticket: FetchTicket,
    /// Page contents or the failure.
    pub result: Result<PageResponse, FetchError>,
}

// ===== Page =====

/// A validated page of records for a given index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: PageIndex,
    records: Vec<Record>,
    total: usize,
}

impl Page {
    /// Validate a wire response into a page.
    ///
    /// # Errors
    ///
    /// `FetchError::InvalidPage` when the response carries more than
    /// `page_size` records or repeats a record id.
    pub fn from_response(
        index: PageIndex,
        response: PageResponse,
        page_size: usize,
    ) -> Result<Self, FetchError> {
        if response.data.len() > page_size {
            return Err(FetchError::InvalidPage {
                page: index.number(),
                reason: format!(
                    "{} records exceeds page size {}",
                    response.data.len(),
                    page_size
                ),
            });
        }

        let mut seen = HashSet::with_capacity(response.data.len());
        for record in &response.data {
            if !seen.insert(&record.id) {
                return Err(FetchError::InvalidPage {
                    page: index.number(),
                    reason: format!("duplicate record id {}", record.id),
                });
            }
        }

        Ok(Self {
            index,
            records: response.data,
            total: response.total,
        })
    }

    /// Index this page was fetched for.
    pub fn index(&self) -> PageIndex {
        self.index
    }

    /// Records in page order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record count across all pages.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Take the records, dropping the page metadata.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
