//! Test series management records.

use async_trait::async_trait;

use roster_core::error::FetchResult;
use roster_core::models::TestSeriesRecord;
use roster_core::ports::{PageRequest, PageResponse, TableSource};

use crate::store::InstitutionalStore;

const TEST_TYPES: [&str; 4] = ["Grand Test", "Mock Test", "Sectional Test", "Chapter Test"];
const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Deterministic sample test series for demos and tests.
pub fn sample_test_series(count: usize) -> Vec<TestSeriesRecord> {
    (0..count)
        .map(|index| {
            let seed = u32::try_from(index).unwrap_or(u32::MAX);
            let test_type = TEST_TYPES[index % TEST_TYPES.len()];
            TestSeriesRecord {
                serial_number: seed.saturating_add(1),
                title: format!("{test_type} {:02}", index / TEST_TYPES.len() + 1),
                test_type: test_type.to_owned(),
                students_enrolled: 30 + seed.wrapping_mul(53) % 400,
                average_score: 35 + seed.wrapping_mul(29) % 60,
                difficulty_level: DIFFICULTIES[index % DIFFICULTIES.len()].to_owned(),
                start_date: format!("2025-{:02}-{:02}", index % 12 + 1, (index * 5) % 28 + 1),
            }
        })
        .collect()
}

#[async_trait]
impl TableSource<TestSeriesRecord> for InstitutionalStore {
    async fn fetch(&self, request: PageRequest) -> FetchResult<PageResponse<TestSeriesRecord>> {
        self.fetch_test_series(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_titles_number_each_test_type() {
        let series = sample_test_series(9);
        assert_eq!(series[0].title, "Grand Test 01");
        assert_eq!(series[4].title, "Grand Test 02");
        assert_eq!(series[5].title, "Mock Test 02");
        assert_eq!(series[8].serial_number, 9);
    }

    #[tokio::test]
    async fn store_serves_test_series_pages() {
        let store = InstitutionalStore::new(Vec::new(), sample_test_series(23));
        let response =
            TableSource::<TestSeriesRecord>::fetch(&store, PageRequest { page: 5, limit: 5 })
                .await
                .expect("store online");
        assert_eq!(response.rows.len(), 3);
        assert_eq!(response.rows[0].serial_number, 21);
        assert_eq!(response.pagination.current_page, 5);
    }
}
