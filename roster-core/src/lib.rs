//! Domain layer of the roster dashboard.
//!
//! - [`models`] - records listed by the tables
//! - [`ports`] - the [`ports::TableSource`] capability a data provider implements
//! - [`views`] - table view state with last-request-wins fetching
//! - [`config`] - settings read from the environment
//! - [`error`] - fetch and configuration errors

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod views;

use std::sync::Arc;

use config::Settings;
use models::{TestSeriesRecord, UserRecord};
use ports::TableSource;
use views::TableHandle;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub settings: Arc<Settings>,
    pub users: Arc<TableHandle<UserRecord>>,
    pub test_series: Arc<TableHandle<TestSeriesRecord>>,
}

impl Context {
    /// Create a new application context over the given data providers.
    pub fn new(
        settings: Settings,
        users: Arc<dyn TableSource<UserRecord>>,
        test_series: Arc<dyn TableSource<TestSeriesRecord>>,
    ) -> Self {
        let users = TableHandle::new(users, settings.page_size, settings.fetch_timeout);
        let test_series =
            TableHandle::new(test_series, settings.page_size, settings.fetch_timeout);

        Self {
            settings: Arc::new(settings),
            users: Arc::new(users),
            test_series: Arc::new(test_series),
        }
    }
}
