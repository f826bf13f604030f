//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod filter;
pub mod key_action;
pub mod page;
pub mod record;
pub mod sort;
pub mod stats;

// Re-export for convenience
pub use error::{AppError, FetchError, SourceError};
pub use filter::{DateRange, FilterState, DATE_RANGE_PRESETS};
pub use key_action::KeyAction;
pub use page::{FetchOutcome, FetchTicket, Page, PageIndex, PageResponse};
pub use record::{About, Details, InvalidRecordId, Record, RecordId, Status};
pub use sort::{SortDirection, SortField, SortKey, SortSpec};
pub use stats::StatusStats;
