//! User filter state.

use super::record::Status;

/// Date-range presets offered by the UI, in days. `0` means all dates.
pub const DATE_RANGE_PRESETS: [u32; 5] = [0, 1, 2, 7, 30];

// ===== DateRange =====

/// Look-back window in whole days. `0` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateRange(u32);

impl DateRange {
    /// No date restriction.
    pub const ALL: DateRange = DateRange(0);

    /// Window of `days` days. `0` means unbounded.
    pub fn days(days: u32) -> Self {
        Self(days)
    }

    /// Window length in days.
    pub fn get(self) -> u32 {
        self.0
    }

    /// True for the all-dates window.
    pub fn is_unbounded(self) -> bool {
        self.0 == 0
    }

    /// Next preset after this one, wrapping back to all dates.
    /// A value that is not a preset moves to the first preset above it.
    pub fn next_preset(self) -> Self {
        DATE_RANGE_PRESETS
            .into_iter()
            .find(|&days| days > self.0)
            .map(Self)
            .unwrap_or(Self::ALL)
    }

    /// Human-readable label, e.g. "All Dates" or "Last 7 Days".
    pub fn label(self) -> String {
        match self.0 {
            0 => "All Dates".to_string(),
            1 => "Last 1 Day".to_string(),
            days => format!("Last {} Days", days),
        }
    }
}

// ===== FilterState =====

/// Search text, status filter and date range applied to the current page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Case-insensitive substring matched against the record name. Empty matches all.
    pub search_text: String,
    /// Exact status match when set.
    pub status: Option<Status>,
    /// Look-back window counted from today.
    pub date_range: DateRange,
}

impl FilterState {
    /// True when no filter narrows the page.
    pub fn is_default(&self) -> bool {
        self.search_text.is_empty() && self.status.is_none() && self.date_range.is_unbounded()
    }

    /// Cycle the status filter: none → ACTIVE → INACTIVE → BLOCKED → none.
    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(Status::Active),
            Some(Status::Active) => Some(Status::Inactive),
            Some(Status::Inactive) => Some(Status::Blocked),
            Some(Status::Blocked) => None,
        };
    }

    /// Move to the next date-range preset.
    pub fn cycle_date_range(&mut self) {
        self.date_range = self.date_range.next_preset();
    }

    /// Reset every filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
