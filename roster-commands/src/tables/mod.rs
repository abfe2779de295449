//! Paginated table views shared by every listing command.
//!
//! Each table plugs in through [`ListingTable`]; navigation, page-size
//! changes, control activations and rendering are implemented once here.

pub mod navigation;
pub mod test_series;
pub mod users;

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::debug;

use crate::Reply;
use roster_core::Context;
use roster_core::views::{FetchOutcome, TableHandle, TableView};
use roster_utils::pagination::token::{
    JumpSubmission, NavAction, PaginationValidationError, build_jump_custom_id,
    validate_custom_id,
};
use roster_utils::pagination::{
    PaginatedView, build_paginated_view_with_footer_note, resolve_jump_target_page,
};
use roster_utils::parse::page_size_label;
use roster_utils::table::{render_notice_table, render_table};

/// Message shown when a control's custom ID cannot be decoded.
pub const PAGINATION_INVALID_MESSAGE: &str = "Invalid pagination interaction.";

/// Static description of a listing table.
pub struct TableInfo {
    /// Short name used in commands and control tokens.
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Plural noun for the footer, e.g. `users`.
    pub noun: &'static str,
    pub empty_message: &'static str,
}

/// A record that can be drawn as one table row.
pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// A table view backed by one of the context's providers.
pub trait ListingTable {
    type Row: TableRow + Send + 'static;

    const INFO: TableInfo;

    fn handle(ctx: &Context) -> &Arc<TableHandle<Self::Row>>;
}

/// Direction of a previous/next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Show `page` (clamped) of table `T`.
///
/// Returns `None` when a newer request superseded this one; that request
/// renders instead.
pub async fn show_page<T: ListingTable>(ctx: &Context, page: i64) -> Option<Reply> {
    let outcome = T::handle(ctx).go_to_page(page).await;
    rendered_after::<T>(ctx, outcome).await
}

/// Step one page back or forward and show it.
pub async fn step_page<T: ListingTable>(ctx: &Context, step: Step) -> Option<Reply> {
    let handle = T::handle(ctx);
    {
        let mut view = handle.view().await;
        match step {
            Step::Previous => view.previous_page(),
            Step::Next => view.next_page(),
        };
    }
    let outcome = handle.refresh().await;
    rendered_after::<T>(ctx, outcome).await
}

/// Switch the page size, which always returns to page 1.
pub async fn change_page_size<T: ListingTable>(ctx: &Context, size: usize) -> Option<Reply> {
    let outcome = T::handle(ctx).change_page_size(size).await;
    rendered_after::<T>(ctx, outcome).await
}

/// Handle activation of one of table `T`'s navigation controls.
pub async fn handle_pagination_interaction<T: ListingTable>(
    ctx: &Context,
    custom_id: &str,
) -> Option<Reply> {
    let token = match validate_custom_id(custom_id, T::INFO.name) {
        Ok(token) => token,
        Err(PaginationValidationError::Invalid | PaginationValidationError::WrongTable) => {
            return Some(Reply::Text(PAGINATION_INVALID_MESSAGE.to_owned()));
        }
    };

    if token.action == NavAction::Jump {
        let total = T::handle(ctx).view().await.pagination().total_pages();
        return Some(Reply::Text(jump_prompt(T::INFO.name, total)));
    }

    let page = i64::try_from(token.page).unwrap_or(i64::MAX);
    show_page::<T>(ctx, page).await
}

/// Handle a jump-prompt submission for table `T`.
pub async fn handle_jump_submission<T: ListingTable>(
    ctx: &Context,
    submission: &JumpSubmission,
) -> Option<Reply> {
    let current_total = T::handle(ctx).view().await.pagination().total_pages();
    let target = resolve_jump_target_page(
        submission.entered_page,
        current_total,
        submission.total_pages_hint,
    );
    show_page::<T>(ctx, i64::try_from(target).unwrap_or(i64::MAX)).await
}

/// Render table `T` as it currently stands.
pub async fn render<T: ListingTable>(ctx: &Context) -> PaginatedView {
    let view = T::handle(ctx).view().await;
    render_table_view(&T::INFO, &view, ctx.settings.window_radius)
}

async fn rendered_after<T: ListingTable>(ctx: &Context, outcome: FetchOutcome) -> Option<Reply> {
    if outcome == FetchOutcome::Stale {
        debug!(table = T::INFO.name, "skipping render of superseded request");
        return None;
    }
    Some(Reply::View(render::<T>(ctx).await))
}

/// Text shown when the jump control is activated.
pub fn jump_prompt(table: &str, total_pages: usize) -> String {
    format!(
        "Jump to Page: enter a page from 1 to {total_pages} by replying `{} <page>`",
        build_jump_custom_id(table, total_pages)
    )
}

/// Compose the card, table and controls of a table view.
pub fn render_table_view<R: TableRow>(
    info: &TableInfo,
    view: &TableView<R>,
    window_radius: usize,
) -> PaginatedView {
    let pagination = view.pagination();
    let mut description = String::new();

    if let Some(error) = view.error() {
        let _ = writeln!(description, "Error loading data: {error}");
    }

    if view.is_loading() {
        description.push_str("Loading...\n");
        description.push_str(&render_notice_table(R::HEADERS, "Loading data..."));
    } else {
        let _ = writeln!(
            description,
            "Showing {} of {} results",
            view.rows().len(),
            pagination.total_count()
        );
        if view.rows().is_empty() {
            description.push_str(&render_notice_table(R::HEADERS, info.empty_message));
        } else {
            let rows: Vec<Vec<String>> = view.rows().iter().map(TableRow::cells).collect();
            description.push_str(&render_table(R::HEADERS, &rows));
        }
    }

    let (first, last) = pagination.item_range();
    let footer_note = format!(
        "Showing {first} to {last} of {} {} • {}",
        pagination.total_count(),
        info.noun,
        page_size_label(pagination.items_per_page())
    );

    let mut paginated = build_paginated_view_with_footer_note(
        info.name,
        info.title,
        description,
        pagination,
        window_radius,
        Some(&footer_note),
    );
    paginated.card.subtitle = Some(info.subtitle.to_owned());
    if view.is_loading() {
        paginated.controls = None;
    }
    paginated
}
