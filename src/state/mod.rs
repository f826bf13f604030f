//! View-state controller (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod pagination;
pub mod projection;
pub mod record_set;
pub mod reveal;
pub mod search_input;
pub mod view_state;

// Re-export for convenience
pub use pagination::{FetchGuard, Pagination};
pub use projection::{filtered, filtered_len, project, status_stats};
pub use record_set::{Mutation, RecordSet};
pub use reveal::{RevealPhase, RevealState};
pub use search_input::SearchInput;
pub use view_state::{reduce, Action, Effect, SearchMode, Transition, ViewState};
