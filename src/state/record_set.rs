//! The loaded page's records, mutable only by whole-set replacement.

use crate::model::{Record, RecordId, Status};
use std::sync::Arc;

/// Records of the currently loaded page, in page order.
///
/// Cloning is cheap and shares storage. A mutation produces a new set and
/// leaves every existing clone untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet(Arc<[Record]>);

/// Result of a by-id mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// The record was found; carries the replacement set.
    Applied(RecordSet),
    /// No record in the set has the requested id.
    NotFound,
}

impl RecordSet {
    /// Take ownership of `records` in page order.
    pub fn new(records: Vec<Record>) -> Self {
        Self(records.into())
    }

    /// Set with no records.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Records in page order.
    pub fn records(&self) -> &[Record] {
        &self.0
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no page is loaded or the page was empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record with `id`, if present.
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.0.iter().find(|record| &record.id == id)
    }

    /// Replace the record with `id` by a copy carrying `status`.
    ///
    /// Every other record, and every other field of the target, is kept.
    pub fn set_status(&self, id: &RecordId, status: Status) -> Mutation {
        let Some(position) = self.0.iter().position(|record| &record.id == id) else {
            return Mutation::NotFound;
        };

        let records: Vec<Record> = self
            .0
            .iter()
            .enumerate()
            .map(|(i, record)| {
                if i == position {
                    record.with_status(status)
                } else {
                    record.clone()
                }
            })
            .collect();

        Mutation::Applied(Self::new(records))
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{About, Details};
    use chrono::NaiveDate;

    fn record(id: &str, status: Status) -> Record {
        Record {
            id: RecordId::new(id).unwrap(),
            about: About {
                name: format!("Demo Demo {}", id),
                status,
                email: format!("demo.d{}@demo.com", id),
            },
            details: Details {
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                invited_by: format!("Dem {}", id),
            },
        }
    }

    fn set() -> RecordSet {
        RecordSet::new(vec![
            record("1", Status::Active),
            record("2", Status::Active),
            record("3", Status::Inactive),
        ])
    }

    fn applied(mutation: Mutation) -> RecordSet {
        match mutation {
            Mutation::Applied(set) => set,
            Mutation::NotFound => panic!("Expected mutation to apply"),
        }
    }

    #[test]
    fn set_status_changes_only_the_target_status() {
        let before = set();
        let after = applied(before.set_status(&RecordId::new("2").unwrap(), Status::Blocked));

        let target = after.get(&RecordId::new("2").unwrap()).unwrap();
        assert_eq!(target.status(), Status::Blocked);
        assert_eq!(target.about.name, "Demo Demo 2");
        assert_eq!(target.about.email, "demo.d2@demo.com");
        assert_eq!(target.details, before.records()[1].details);

        assert_eq!(after.records()[0], before.records()[0]);
        assert_eq!(after.records()[2], before.records()[2]);
    }

    #[test]
    fn set_status_preserves_order_and_length() {
        let after = applied(set().set_status(&RecordId::new("1").unwrap(), Status::Inactive));
        let ids: Vec<&str> = after.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn set_status_is_idempotent() {
        let id = RecordId::new("3").unwrap();
        let once = applied(set().set_status(&id, Status::Blocked));
        let twice = applied(once.set_status(&id, Status::Blocked));
        assert_eq!(once, twice);
    }

    #[test]
    fn set_status_unknown_id_is_not_found() {
        let result = set().set_status(&RecordId::new("99").unwrap(), Status::Blocked);
        assert_eq!(result, Mutation::NotFound);
    }

    #[test]
    fn prior_snapshot_is_unchanged_by_mutation() {
        let before = set();
        let snapshot = before.clone();
        let _after = applied(before.set_status(&RecordId::new("1").unwrap(), Status::Blocked));

        assert_eq!(snapshot.records()[0].status(), Status::Active);
    }

    #[test]
    fn set_status_on_empty_set_is_not_found() {
        let result = RecordSet::empty().set_status(&RecordId::new("1").unwrap(), Status::Active);
        assert_eq!(result, Mutation::NotFound);
    }
}
