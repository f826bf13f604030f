//! Record domain types.
//!
//! A record is one row of the browser: a person's `about` block (name, status,
//! email) and `details` block (date, inviter). The wire shape is camelCase JSON
//! with `YYYY-MM-DD` dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== RecordId =====

/// Identifier of a record. Unique within a page and the sole key used
/// to target status mutations.
///
/// Smart constructor rejects empty and whitespace-only ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidRecordId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidRecordId::Empty);
        }
        Ok(Self(raw))
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

/// Rejected record id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordId {
    /// Empty or whitespace-only id.
    #[error("Record ID cannot be empty")]
    Empty,
}

// ===== Status =====

/// Account status of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Account in good standing.
    Active,
    /// Account not in use.
    Inactive,
    /// Account locked out.
    Blocked,
}

impl Status {
    /// All statuses in the order the UI offers them.
    pub const ALL: [Status; 3] = [Status::Active, Status::Inactive, Status::Blocked];

    /// Wire label (`"ACTIVE"`, `"INACTIVE"`, `"BLOCKED"`).
    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Inactive => "INACTIVE",
            Status::Blocked => "BLOCKED",
        }
    }

    /// Parse a wire label. Case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== Record =====

/// Identity and status of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    /// Display name. Searched by the filter bar.
    pub name: String,
    /// Account status.
    pub status: Status,
    /// Contact address.
    pub email: String,
}

/// Provenance of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    /// Calendar date, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    /// Who invited this record. `invitedBy` on the wire.
    #[serde(rename = "invitedBy")]
    pub invited_by: String,
}

/// One browsable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique within a page.
    pub id: RecordId,
    /// Identity and status.
    pub about: About,
    /// Date and inviter.
    pub details: Details,
}

impl Record {
    /// Copy of this record with `about.status` replaced. All other fields are kept.
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            about: About {
                status,
                ..self.about.clone()
            },
            ..self.clone()
        }
    }

    /// Shorthand for `about.status`.
    pub fn status(&self) -> Status {
        self.about.status
    }
}
