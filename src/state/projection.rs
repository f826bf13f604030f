//! Derivation of the visible rows from the loaded page (pure).
//!
//! Pipeline, in order: search → status → date range → reveal truncation →
//! sort. Nothing here mutates the records it is given.

use crate::model::{DateRange, FilterState, Record, SortSpec, StatusStats};
use chrono::{Days, NaiveDate};

/// Earliest date a record may carry to pass `range`, counted back from `today`.
///
/// `None` means the range does not narrow anything: either it is unbounded or
/// the subtraction falls off the calendar.
pub fn date_cutoff(range: DateRange, today: NaiveDate) -> Option<NaiveDate> {
    if range.is_unbounded() {
        return None;
    }
    today.checked_sub_days(Days::new(u64::from(range.get())))
}

/// Compiled form of a [`FilterState`] for one derivation.
///
/// Lowercases the search text and resolves the date cutoff once, so `today`
/// is captured a single time per pass.
#[derive(Debug, Clone)]
pub struct RecordFilter<'a> {
    needle: String,
    filters: &'a FilterState,
    cutoff: Option<NaiveDate>,
}

impl<'a> RecordFilter<'a> {
    /// Compile `filters` against `today`.
    pub fn new(filters: &'a FilterState, today: NaiveDate) -> Self {
        Self {
            needle: filters.search_text.to_lowercase(),
            filters,
            cutoff: date_cutoff(filters.date_range, today),
        }
    }

    /// True when `record` passes every active filter.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.needle.is_empty() && !record.about.name.to_lowercase().contains(&self.needle) {
            return false;
        }

        if let Some(status) = self.filters.status {
            if record.about.status != status {
                return false;
            }
        }

        match self.cutoff {
            Some(cutoff) => record.details.date >= cutoff,
            None => true,
        }
    }
}

/// Records passing every filter, in page order.
pub fn filtered<'r>(
    records: &'r [Record],
    filters: &FilterState,
    today: NaiveDate,
) -> Vec<&'r Record> {
    let filter = RecordFilter::new(filters, today);
    records.iter().filter(|record| filter.matches(record)).collect()
}

/// Length of the filtered set, before reveal truncation.
pub fn filtered_len(records: &[Record], filters: &FilterState, today: NaiveDate) -> usize {
    let filter = RecordFilter::new(filters, today);
    records.iter().filter(|record| filter.matches(record)).count()
}

/// The ordered visible rows.
///
/// The first `min(revealed, filtered_len)` filtered records, then sorted by
/// `sort` (stable) when it has keys.
pub fn project<'r>(
    records: &'r [Record],
    filters: &FilterState,
    sort: &SortSpec,
    revealed: usize,
    today: NaiveDate,
) -> Vec<&'r Record> {
    let mut rows = filtered(records, filters, today);
    rows.truncate(revealed);

    if !sort.is_empty() {
        rows.sort_by(|a, b| sort.compare(a, b));
    }

    rows
}

/// Status statistics over the whole loaded page, independent of filters.
pub fn status_stats(records: &[Record]) -> StatusStats {
    StatusStats::from_records(records)
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
