//! Pagination control builders (previous/next, page buttons, jump).

use serde::Serialize;

use super::page::PageIndicator;
use super::state::PaginationState;
use super::token::{NavAction, build_custom_id};

/// A clickable control in the pagination row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub label: String,
    pub custom_id: String,
    pub disabled: bool,
    /// Marks the button of the page currently shown.
    pub active: bool,
}

/// One slot between the previous and next buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    Page(NavButton),
    Gap,
}

/// Everything the rendering surface needs to draw the pagination row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControls {
    pub previous: NavButton,
    pub items: Vec<NavItem>,
    pub jump: NavButton,
    pub next: NavButton,
}

/// Build the pagination row for `table`.
///
/// Returns `None` for single-page listings, which render no controls.
pub fn build_nav_controls(
    table: &str,
    state: &PaginationState,
    window_radius: usize,
) -> Option<NavControls> {
    if !state.should_render_controls() {
        return None;
    }

    let current_page = state.current_page();
    let total_pages = state.total_pages();

    let prev_page = if state.has_previous() {
        current_page - 1
    } else {
        current_page
    };

    let next_page = if state.has_next() {
        current_page + 1
    } else {
        current_page
    };

    let previous = NavButton {
        label: "◀ Prev".to_owned(),
        custom_id: build_custom_id(table, NavAction::Prev, prev_page, total_pages),
        disabled: !state.has_previous(),
        active: false,
    };

    let next = NavButton {
        label: "Next ▶".to_owned(),
        custom_id: build_custom_id(table, NavAction::Next, next_page, total_pages),
        disabled: !state.has_next(),
        active: false,
    };

    let jump = NavButton {
        label: "*".to_owned(),
        custom_id: build_custom_id(table, NavAction::Jump, current_page, total_pages),
        disabled: false,
        active: false,
    };

    let items = state
        .indicators(window_radius)
        .into_iter()
        .map(|indicator| match indicator {
            PageIndicator::Page(page) => NavItem::Page(NavButton {
                label: page.to_string(),
                custom_id: build_custom_id(table, NavAction::Page, page, total_pages),
                disabled: false,
                active: page == current_page,
            }),
            PageIndicator::Ellipsis => NavItem::Gap,
        })
        .collect();

    Some(NavControls {
        previous,
        items,
        jump,
        next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::state::PaginationMeta;

    fn state_on(page: i64, total_pages: usize) -> PaginationState {
        let mut state = PaginationState::new(10);
        state.apply_meta(PaginationMeta {
            current_page: 0,
            total_pages,
            total_count: total_pages * 10,
        });
        state.go_to_page(page);
        state
    }

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(build_nav_controls("users", &state_on(1, 1), 2), None);
    }

    #[test]
    fn edges_disable_navigation() {
        let first = build_nav_controls("users", &state_on(1, 4), 2).expect("controls");
        assert!(first.previous.disabled);
        assert!(!first.next.disabled);
        assert_eq!(first.next.custom_id, "pg:users:next:2:4");

        let last = build_nav_controls("users", &state_on(4, 4), 2).expect("controls");
        assert!(!last.previous.disabled);
        assert!(last.next.disabled);
        assert_eq!(last.previous.custom_id, "pg:users:prev:3:4");
    }

    #[test]
    fn gaps_follow_the_page_window() {
        let controls = build_nav_controls("tests", &state_on(5, 10), 2).expect("controls");
        let labels: Vec<&str> = controls
            .items
            .iter()
            .map(|item| match item {
                NavItem::Page(button) => button.label.as_str(),
                NavItem::Gap => "...",
            })
            .collect();
        assert_eq!(labels, ["1", "...", "3", "4", "5", "6", "7", "...", "10"]);

        let active: Vec<&NavButton> = controls
            .items
            .iter()
            .filter_map(|item| match item {
                NavItem::Page(button) if button.active => Some(button),
                _ => None,
            })
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].custom_id, "pg:tests:page:5:10");
    }
}
