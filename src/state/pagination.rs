//! Page index bounds and fetch ticket issuing.

use crate::model::{FetchTicket, PageIndex};

// ===== Pagination =====

/// Current page index, bounded by a fixed last index.
///
/// The bound is configuration, not the `total` a page reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    index: PageIndex,
    last: PageIndex,
}

impl Pagination {
    /// Start at `start`, clamped into `0..=last`.
    pub fn new(start: PageIndex, last: PageIndex) -> Self {
        Self {
            index: start.min(last),
            last,
        }
    }

    /// Current page.
    pub fn index(&self) -> PageIndex {
        self.index
    }

    /// Highest reachable page.
    pub fn last(&self) -> PageIndex {
        self.last
    }

    /// True unless on the first page.
    pub fn has_previous(&self) -> bool {
        self.index > PageIndex::FIRST
    }

    /// True unless on the last page.
    pub fn has_next(&self) -> bool {
        self.index < self.last
    }

    /// One page back. `None` at the first page.
    pub fn previous(self) -> Option<Self> {
        self.index.get().checked_sub(1).map(|i| Self {
            index: PageIndex::new(i),
            ..self
        })
    }

    /// One page forward. `None` at the last page.
    pub fn next(self) -> Option<Self> {
        if !self.has_next() {
            return None;
        }
        Some(Self {
            index: PageIndex::new(self.index.get() + 1),
            ..self
        })
    }
}

// ===== FetchGuard =====

/// Issues fetch tickets and decides which outcomes may be applied.
///
/// Last-issued-wins: only the most recently issued ticket is accepted, and
/// only once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchGuard {
    issued: u64,
    latest: Option<FetchTicket>,
    settled: bool,
}

impl FetchGuard {
    /// Issue a ticket for `page`. Every earlier ticket becomes stale.
    pub fn issue(self, page: PageIndex) -> (Self, FetchTicket) {
        let generation = self.issued + 1;
        let ticket = FetchTicket { generation, page };
        (
            Self {
                issued: generation,
                latest: Some(ticket),
                settled: false,
            },
            ticket,
        )
    }

    /// Whether an outcome for `ticket` should be applied.
    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        !self.settled && self.latest.as_ref() == Some(ticket)
    }

    /// Mark the latest ticket as resolved.
    pub fn settle(self) -> Self {
        Self {
            settled: true,
            ..self
        }
    }

    /// True while the latest ticket has not resolved.
    pub fn is_loading(&self) -> bool {
        self.latest.is_some() && !self.settled
    }

    /// Most recently issued ticket, resolved or not.
    pub fn latest(&self) -> Option<FetchTicket> {
        self.latest
    }
}
