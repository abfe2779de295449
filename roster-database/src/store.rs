use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use roster_core::error::{FetchError, FetchResult};
use roster_core::models::{TestSeriesRecord, UserRecord};
use roster_core::ports::{PageRequest, PageResponse};
use roster_utils::pagination::{PaginationMeta, clamp_page, page_window, total_pages};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<UserRecord>,
    test_series: Vec<TestSeriesRecord>,
    outage: Option<String>,
}

/// In-memory institutional data shared by the dashboard tables.
///
/// Cheap to clone; clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InstitutionalStore {
    state: Arc<RwLock<StoreState>>,
    latency: Duration,
}

impl InstitutionalStore {
    /// Create a store holding the given records.
    pub fn new(users: Vec<UserRecord>, test_series: Vec<TestSeriesRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                users,
                test_series,
                outage: None,
            })),
            latency: Duration::ZERO,
        }
    }

    /// Create a store from JSON arrays of user and test series records.
    pub fn from_json(users_json: &str, test_series_json: &str) -> serde_json::Result<Self> {
        let users = serde_json::from_str(users_json)?;
        let test_series = serde_json::from_str(test_series_json)?;
        Ok(Self::new(users, test_series))
    }

    /// Delay every fetch by `latency`, to mimic a remote service.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every fetch fail with `message` until cleared with `None`.
    pub async fn set_outage(&self, message: Option<String>) {
        self.state.write().await.outage = message;
    }

    pub(crate) async fn fetch_users(
        &self,
        request: PageRequest,
    ) -> FetchResult<PageResponse<UserRecord>> {
        self.simulate_latency().await;
        let state = self.state.read().await;
        check_outage(&state)?;
        Ok(serve_page(&state.users, request))
    }

    pub(crate) async fn fetch_test_series(
        &self,
        request: PageRequest,
    ) -> FetchResult<PageResponse<TestSeriesRecord>> {
        self.simulate_latency().await;
        let state = self.state.read().await;
        check_outage(&state)?;
        Ok(serve_page(&state.test_series, request))
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn check_outage(state: &StoreState) -> FetchResult<()> {
    match &state.outage {
        Some(message) => Err(FetchError::Transport(message.clone())),
        None => Ok(()),
    }
}

/// Slice one page out of `rows`, clamping the requested page like a server would.
fn serve_page<T: Clone>(rows: &[T], request: PageRequest) -> PageResponse<T> {
    let limit = request.limit.max(1);
    let total = total_pages(rows.len(), limit);
    let page = clamp_page(request.page, total);
    let (start, end) = page_window(rows.len(), limit, page);

    debug!(
        requested = request.page,
        served = page,
        limit,
        total_count = rows.len(),
        "serving page"
    );

    PageResponse {
        rows: rows[start..end].to_vec(),
        pagination: PaginationMeta {
            current_page: page,
            total_pages: total,
            total_count: rows.len(),
        },
    }
}
