//! Domain-level keyboard actions independent of key bindings.

use super::record::Status;
use super::sort::SortField;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor down. Default: j/↓
    CursorDown,
    /// Move the row cursor up. Default: k/↑
    CursorUp,

    // Pagination
    /// Go to the previous page (floor at the first page). Default: h/←/[
    PrevPage,
    /// Go to the next page (no-op on the last page). Default: l/→/]
    NextPage,

    // Filters
    /// Start editing the search text. Default: /
    StartSearch,
    /// Cycle status filter: all → ACTIVE → INACTIVE → BLOCKED. Default: s
    CycleStatusFilter,
    /// Cycle date range presets: all → 1 → 2 → 7 → 30 days. Default: d
    CycleDateRange,
    /// Reset search, status and date filters. Default: x
    ClearFilters,

    // Sorting
    /// Toggle single-column sort. Default: 1-5
    SortBy(SortField),
    /// Toggle a column in a multi-column sort. Default: Alt+1-5
    AddSortBy(SortField),

    // Record actions
    /// Set the status of the record under the cursor. Default: a/i/b
    SetStatus(Status),

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_actions_discriminate_by_field() {
        assert_ne!(
            KeyAction::SortBy(SortField::Name),
            KeyAction::SortBy(SortField::Date)
        );
        assert_ne!(
            KeyAction::SortBy(SortField::Name),
            KeyAction::AddSortBy(SortField::Name)
        );
    }

    #[test]
    fn set_status_discriminates_by_status() {
        assert_eq!(
            KeyAction::SetStatus(Status::Blocked),
            KeyAction::SetStatus(Status::Blocked)
        );
        assert_ne!(
            KeyAction::SetStatus(Status::Blocked),
            KeyAction::SetStatus(Status::Active)
        );
    }

    #[test]
    fn key_action_is_usable_as_map_key() {
        use std::collections::HashSet;
        let set: HashSet<KeyAction> = [KeyAction::Quit, KeyAction::Quit, KeyAction::Help]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }
}
