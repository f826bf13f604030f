//! Sort specification and record ordering.
//!
//! Column toggling follows table-header semantics: each toggle moves a column
//! through ascending → descending → unsorted. A plain toggle makes that column
//! the only sort key; a multi-toggle keeps the other keys.

use super::record::Record;
use std::cmp::Ordering;

// ===== SortField =====

/// Sortable record columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// `about.name`
    Name,
    /// `about.status`, by label
    Status,
    /// `about.email`
    Email,
    /// `details.date`
    Date,
    /// `details.invitedBy`
    InvitedBy,
}

impl SortField {
    /// Every field, in column order.
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Status,
        SortField::Email,
        SortField::Date,
        SortField::InvitedBy,
    ];

    /// Column header text.
    pub fn header(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Status => "Status",
            SortField::Email => "Email",
            SortField::Date => "Date",
            SortField::InvitedBy => "Invited By",
        }
    }

    /// Compare two records on this field in ascending order.
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::Name => compare_alphanumeric(&a.about.name, &b.about.name),
            SortField::Status => a.about.status.label().cmp(b.about.status.label()),
            SortField::Email => compare_alphanumeric(&a.about.email, &b.about.email),
            SortField::Date => a.details.date.cmp(&b.details.date),
            SortField::InvitedBy => {
                compare_alphanumeric(&a.details.invited_by, &b.details.invited_by)
            }
        }
    }
}

/// Direction applied to a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// One column of a [`SortSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    /// Column being sorted.
    pub field: SortField,
    /// Direction for this column.
    pub direction: SortDirection,
}

// ===== SortSpec =====

/// Ordered sort keys. Earlier keys take precedence; empty means page order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    /// Sort by `keys`, highest precedence first.
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self(keys)
    }

    /// Keys in precedence order.
    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    /// True when no column is sorted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Direction currently applied to `field`, if it is a sort key.
    pub fn direction_of(&self, field: SortField) -> Option<SortDirection> {
        self.0
            .iter()
            .find(|key| key.field == field)
            .map(|key| key.direction)
    }

    /// Single-column toggle. The result sorts by `field` alone (or by nothing
    /// once the column cycles back to unsorted).
    pub fn toggle(&mut self, field: SortField) {
        let next = next_direction(self.direction_of(field));
        self.0.clear();
        if let Some(direction) = next {
            self.0.push(SortKey { field, direction });
        }
    }

    /// Multi-column toggle. Other keys are kept; a new column is appended.
    pub fn toggle_multi(&mut self, field: SortField) {
        match self.0.iter().position(|key| key.field == field) {
            Some(pos) => match next_direction(Some(self.0[pos].direction)) {
                Some(direction) => self.0[pos].direction = direction,
                None => {
                    self.0.remove(pos);
                }
            },
            None => self.0.push(SortKey {
                field,
                direction: SortDirection::Ascending,
            }),
        }
    }

    /// Compare two records by every key in order.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        for key in &self.0 {
            let ordering = key.field.compare(a, b);
            let ordering = match key.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    }
}

// ===== Alphanumeric comparison =====

/// Case-insensitive comparison where digit runs compare by numeric value,
/// so `"Demo 9" < "Demo 10"` and `"item 007" == "item 7"`.
///
/// Text sorts before a number at the same position. When every shared chunk
/// is equal, the string with fewer chunks sorts first.
pub fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut a_chunks = Chunks::new(&a);
    let mut b_chunks = Chunks::new(&b);

    loop {
        match (a_chunks.next(), b_chunks.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (is_digits(x), is_digits(y)) {
                    (true, true) => compare_digit_runs(x, y),
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn is_digits(chunk: &str) -> bool {
    chunk.starts_with(|c: char| c.is_ascii_digit())
}

fn compare_digit_runs(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Splits a string into alternating runs of ASCII digits and everything else.
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
