//! Status distribution statistics for the loaded page.

use super::record::{Record, Status};

/// Share of page records in the inactive and blocked states.
///
/// Always computed over the full loaded page, never the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusStats {
    /// Records on the page.
    pub total: usize,
    /// Records with `INACTIVE` status.
    pub inactive: usize,
    /// Records with `BLOCKED` status.
    pub blocked: usize,
    /// Rounded to the nearest integer. 0 for an empty page.
    pub inactive_percentage: u32,
    /// Rounded to the nearest integer. 0 for an empty page.
    pub blocked_percentage: u32,
}

impl StatusStats {
    /// Count statuses over `records`.
    pub fn from_records(records: &[Record]) -> Self {
        let total = records.len();
        let inactive = count(records, Status::Inactive);
        let blocked = count(records, Status::Blocked);

        Self {
            total,
            inactive,
            blocked,
            inactive_percentage: percentage(inactive, total),
            blocked_percentage: percentage(blocked, total),
        }
    }
}

fn count(records: &[Record], status: Status) -> usize {
    records.iter().filter(|r| r.about.status == status).count()
}

/// `part / whole` as a whole percentage, rounding half away from zero.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{About, Details, RecordId};
    use chrono::NaiveDate;

    fn records_with(statuses: &[Status]) -> Vec<Record> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, &status)| Record {
                id: RecordId::new((i + 1).to_string()).unwrap(),
                about: About {
                    name: format!("Demo Demo {}", i + 1),
                    status,
                    email: format!("demo.d{}@demo.com", i + 1),
                },
                details: Details {
                    date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                    invited_by: format!("Dem {}", i + 1),
                },
            })
            .collect()
    }

    #[test]
    fn three_inactive_two_blocked_of_ten() {
        use Status::*;
        let records = records_with(&[
            Active, Inactive, Blocked, Active, Inactive, Active, Blocked, Inactive, Active, Active,
        ]);

        let stats = StatusStats::from_records(&records);

        assert_eq!(stats.inactive_percentage, 30);
        assert_eq!(stats.blocked_percentage, 20);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.inactive, 3);
        assert_eq!(stats.blocked, 2);
    }

    #[test]
    fn empty_page_reports_zero() {
        let stats = StatusStats::from_records(&[]);
        assert_eq!(stats, StatusStats::default());
    }

    #[test]
    fn percentages_round_to_nearest() {
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 7), 0);
        assert_eq!(percentage(7, 7), 100);
    }
}
