//! User analytics records.

use async_trait::async_trait;

use roster_core::error::FetchResult;
use roster_core::models::UserRecord;
use roster_core::ports::{PageRequest, PageResponse, TableSource};

use crate::store::InstitutionalStore;

const FIRST_NAMES: [&str; 8] = [
    "Aaditya", "Ishita", "Karthik", "Meera", "Rohit", "Ananya", "Vikram", "Sneha",
];
const LAST_NAMES: [&str; 6] = ["Sharma", "Agarwal", "Reddy", "Iyer", "Verma", "Nair"];
const STATUSES: [&str; 6] = ["Active", "Active", "Active", "Inactive", "Pending", "Suspended"];

/// Deterministic sample users for demos and tests.
pub fn sample_users(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|index| {
            let first = FIRST_NAMES[index % FIRST_NAMES.len()];
            let last = LAST_NAMES[(index / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let seed = u32::try_from(index).unwrap_or(u32::MAX);
            UserRecord {
                user_name: format!("{first} {last}"),
                email: format!(
                    "{}.{}{}@email.com",
                    first.to_ascii_lowercase(),
                    last.to_ascii_lowercase(),
                    index + 1
                ),
                tests_completed: seed.wrapping_mul(7) % 20,
                avg_score: 40 + seed.wrapping_mul(37) % 60,
                join_date: format!("2024-{:02}-{:02}", index % 12 + 1, index % 28 + 1),
                last_login: format!("2025-{:02}-{:02}", (index + 5) % 12 + 1, (index * 3) % 28 + 1),
                status: STATUSES[index % STATUSES.len()].to_owned(),
            }
        })
        .collect()
}

#[async_trait]
impl TableSource<UserRecord> for InstitutionalStore {
    async fn fetch(&self, request: PageRequest) -> FetchResult<PageResponse<UserRecord>> {
        self.fetch_users(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_users_are_deterministic() {
        let users = sample_users(47);
        assert_eq!(users.len(), 47);
        assert_eq!(users, sample_users(47));
        assert_eq!(users[0].user_name, "Aaditya Sharma");
        assert_eq!(users[0].email, "aaditya.sharma1@email.com");
        assert_eq!(users[8].user_name, "Aaditya Agarwal");
        assert!(users.iter().all(|user| (40..100).contains(&user.avg_score)));
    }

    #[tokio::test]
    async fn store_serves_user_pages() {
        let store = InstitutionalStore::new(sample_users(23), Vec::new());
        let response = TableSource::<UserRecord>::fetch(&store, PageRequest { page: 3, limit: 10 })
            .await
            .expect("store online");
        assert_eq!(response.rows.len(), 3);
        assert_eq!(response.rows[0].email, "rohit.reddy21@email.com");
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.pagination.total_count, 23);
    }
}
