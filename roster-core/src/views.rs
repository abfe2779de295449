//! Table view state and the last-request-wins fetch flow.
//!
//! A view owns its [`PaginationState`], the rows of the page on screen and
//! the loading/error flags. Every fetch takes a ticket from the view's
//! [`RequestSequencer`]; a completion only lands if its ticket is still the
//! latest, so a slow response can never overwrite a newer one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use roster_utils::pagination::{PaginationState, RequestSequencer, RequestTicket};

use crate::error::{FetchError, FetchResult};
use crate::ports::{PageRequest, PageResponse, TableSource};

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows and pagination were updated.
    Applied,
    /// The provider failed; the error message is now shown.
    Failed,
    /// A newer request was issued meanwhile; the result was dropped.
    Stale,
}

/// State of one paginated table.
#[derive(Debug)]
pub struct TableView<T> {
    pagination: PaginationState,
    /// Pagination of the rows currently held, restored when a fetch fails.
    shown: PaginationState,
    rows: Vec<T>,
    loading: bool,
    error: Option<String>,
    sequencer: RequestSequencer,
}

impl<T> TableView<T> {
    pub fn new(items_per_page: usize) -> Self {
        let pagination = PaginationState::new(items_per_page);
        Self {
            pagination,
            shown: pagination,
            rows: Vec::new(),
            loading: false,
            error: None,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared by the next successful one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Move to `page` (clamped). The caller is expected to refresh.
    pub fn go_to_page(&mut self, page: i64) -> usize {
        self.pagination.go_to_page(page)
    }

    pub fn previous_page(&mut self) -> usize {
        self.pagination.previous_page()
    }

    pub fn next_page(&mut self) -> usize {
        self.pagination.next_page()
    }

    /// Switch page size and go back to page 1. The caller is expected to refresh.
    pub fn change_page_size(&mut self, items_per_page: usize) {
        self.pagination.change_page_size(items_per_page);
    }

    /// Issue a ticket for the current page and mark the view as loading.
    pub fn begin_fetch(&mut self) -> (RequestTicket, PageRequest) {
        let ticket = self.sequencer.issue();
        self.loading = true;
        let request = PageRequest {
            page: self.pagination.current_page(),
            limit: self.pagination.items_per_page(),
        };
        (ticket, request)
    }

    /// Apply a completed fetch if `ticket` is still the latest one.
    ///
    /// A failed fetch keeps the previous rows and moves pagination back to
    /// the page those rows belong to.
    pub fn complete_fetch(
        &mut self,
        ticket: RequestTicket,
        result: FetchResult<PageResponse<T>>,
    ) -> FetchOutcome {
        if !self.sequencer.is_current(ticket) {
            debug!(ticket = ticket.get(), "discarding stale page response");
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(response) => {
                self.rows = response.rows;
                self.pagination.apply_meta(response.pagination);
                self.shown = self.pagination;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(source) => {
                warn!(%source, "page fetch failed");
                self.pagination = self.shown;
                self.error = Some(source.to_string());
                FetchOutcome::Failed
            }
        }
    }
}

/// A table's provider together with its view state.
pub struct TableHandle<T> {
    source: Arc<dyn TableSource<T>>,
    view: Mutex<TableView<T>>,
    fetch_timeout: Option<Duration>,
}

impl<T: Send + 'static> TableHandle<T> {
    pub fn new(
        source: Arc<dyn TableSource<T>>,
        items_per_page: usize,
        fetch_timeout: Option<Duration>,
    ) -> Self {
        Self {
            source,
            view: Mutex::new(TableView::new(items_per_page)),
            fetch_timeout,
        }
    }

    /// Lock the view for reading or for a navigation change.
    pub async fn view(&self) -> tokio::sync::MutexGuard<'_, TableView<T>> {
        self.view.lock().await
    }

    /// Fetch the page the view currently points at.
    ///
    /// The view lock is released while the provider is awaited, so other
    /// navigation can proceed; whichever request was issued last wins.
    pub async fn refresh(&self) -> FetchOutcome {
        let (ticket, request) = self.view.lock().await.begin_fetch();
        debug!(
            ticket = ticket.get(),
            page = request.page,
            limit = request.limit,
            "fetching page"
        );

        let result = match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.source.fetch(request))
                .await
                .unwrap_or_else(|_| {
                    Err(FetchError::Timeout(
                        u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                    ))
                }),
            None => self.source.fetch(request).await,
        };

        self.view.lock().await.complete_fetch(ticket, result)
    }

    /// Jump to `page` (clamped) and fetch it.
    pub async fn go_to_page(&self, page: i64) -> FetchOutcome {
        self.view.lock().await.go_to_page(page);
        self.refresh().await
    }

    /// Change the page size, reset to page 1 and fetch.
    pub async fn change_page_size(&self, items_per_page: usize) -> FetchOutcome {
        self.view.lock().await.change_page_size(items_per_page);
        self.refresh().await
    }
}
