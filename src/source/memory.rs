//! In-memory paginated source.

use super::PageSource;
use crate::model::{FetchError, PageIndex, PageResponse, Record};

/// Serves fixed-size pages out of a record list.
///
/// Page `n` (1-based) holds records `[(n - 1) * page_size, n * page_size)`.
/// Pages past the end are empty; `total` is always the full record count.
#[derive(Debug, Clone)]
pub struct MemorySource {
    records: Vec<Record>,
    page_size: usize,
}

impl MemorySource {
    /// `page_size` is floored at 1.
    pub fn new(records: Vec<Record>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
        }
    }
}

impl PageSource for MemorySource {
    fn fetch_page(&self, page: PageIndex) -> Result<PageResponse, FetchError> {
        let start = page.get().saturating_mul(self.page_size);
        let data = self
            .records
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        Ok(PageResponse {
            data,
            total: self.records.len(),
        })
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{About, Details, RecordId, Status};
    use chrono::NaiveDate;

    fn records(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|i| Record {
                id: RecordId::new(i.to_string()).unwrap(),
                about: About {
                    name: format!("Demo Demo {}", i),
                    status: Status::Active,
                    email: format!("demo.d{}@demo.com", i),
                },
                details: Details {
                    date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                    invited_by: format!("Dem {}", i),
                },
            })
            .collect()
    }

    fn ids(response: &PageResponse) -> Vec<&str> {
        response.data.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn first_page_holds_first_page_size_records() {
        let source = MemorySource::new(records(25), 10);
        let response = source.fetch_page(PageIndex::FIRST).unwrap();

        assert_eq!(ids(&response), vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert_eq!(response.total, 25);
    }

    #[test]
    fn last_page_is_partial() {
        let source = MemorySource::new(records(25), 10);
        let response = source.fetch_page(PageIndex::new(2)).unwrap();

        assert_eq!(ids(&response), vec!["21", "22", "23", "24", "25"]);
    }

    #[test]
    fn page_past_end_is_empty_with_total() {
        let source = MemorySource::new(records(25), 10);
        let response = source.fetch_page(PageIndex::new(7)).unwrap();

        assert!(response.data.is_empty());
        assert_eq!(response.total, 25);
    }

    #[test]
    fn huge_page_index_does_not_overflow() {
        let source = MemorySource::new(records(3), 10);
        let response = source.fetch_page(PageIndex::new(usize::MAX)).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn zero_page_size_is_floored_to_one() {
        let source = MemorySource::new(records(3), 0);
        assert_eq!(source.page_size(), 1);

        let response = source.fetch_page(PageIndex::new(2)).unwrap();
        assert_eq!(ids(&response), vec!["3"]);
    }

    #[test]
    fn empty_source_serves_empty_pages() {
        let source = MemorySource::new(Vec::new(), 10);
        let response = source.fetch_page(PageIndex::FIRST).unwrap();

        assert!(response.data.is_empty());
        assert_eq!(response.total, 0);
    }
}
