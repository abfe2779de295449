//! Sample institutional data store backing the dashboard tables.

mod store;
/// Test series records and their provider.
pub mod test_series;
/// User records and their provider.
pub mod users;

pub use store::InstitutionalStore;
pub use test_series::sample_test_series;
pub use users::sample_users;
