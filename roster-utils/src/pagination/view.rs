//! Card and control composition helpers for paginated views.

use std::fmt::Write as _;

use serde::Serialize;

use crate::card::{Card, build_paginated_card, build_paginated_card_with_footer_note};

use super::components::{NavButton, NavControls, NavItem, build_nav_controls};
use super::page::{DEFAULT_WINDOW_RADIUS, paginated_bulleted_description, total_pages};
use super::state::{PaginationMeta, PaginationState};

/// A rendered page: the card plus the controls drawn under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatedView {
    pub card: Card,
    pub controls: Option<NavControls>,
}

impl PaginatedView {
    /// Render the card followed by the control row and its action hints.
    pub fn to_text(&self) -> String {
        let mut out = self.card.to_string();
        if let Some(controls) = &self.controls {
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&render_nav_controls(controls));
            out.push('\n');
            out.push_str(&render_action_hints(controls));
        }
        out
    }
}

/// Build a generic paginated list view from in-memory items.
pub fn build_paginated_list_view(
    table: &str,
    title: &str,
    items: &[String],
    page: usize,
    per_page: usize,
) -> PaginatedView {
    let mut state = PaginationState::new(per_page);
    state.apply_meta(PaginationMeta {
        current_page: 0,
        total_pages: total_pages(items.len(), per_page),
        total_count: items.len(),
    });
    state.go_to_page(i64::try_from(page).unwrap_or(i64::MAX));
    let description = paginated_bulleted_description(items, per_page, state.current_page());

    build_paginated_view(table, title, description, &state, DEFAULT_WINDOW_RADIUS)
}

/// Build a paginated card + navigation controls from a pre-rendered description.
pub fn build_paginated_view(
    table: &str,
    title: &str,
    description: String,
    state: &PaginationState,
    window_radius: usize,
) -> PaginatedView {
    build_paginated_view_with_footer_note(table, title, description, state, window_radius, None)
}

/// Build a paginated card + navigation controls with an optional footer note.
pub fn build_paginated_view_with_footer_note(
    table: &str,
    title: &str,
    description: String,
    state: &PaginationState,
    window_radius: usize,
    footer_note: Option<&str>,
) -> PaginatedView {
    let page = state.current_page();
    let total_pages = state.total_pages();

    let card = match footer_note {
        Some(note) => {
            build_paginated_card_with_footer_note(title, description, page, total_pages, Some(note))
        }
        None => build_paginated_card(title, description, page, total_pages),
    };

    PaginatedView {
        card,
        controls: build_nav_controls(table, state, window_radius),
    }
}

/// Render the control row, e.g. `[◀ Prev] [1] … [4] (5) [6] … [10] [*] [Next ▶]`.
///
/// The current page is drawn in parentheses and disabled buttons in braces.
pub fn render_nav_controls(controls: &NavControls) -> String {
    let mut parts = Vec::with_capacity(controls.items.len() + 3);
    parts.push(render_button(&controls.previous));
    for item in &controls.items {
        match item {
            NavItem::Page(button) => parts.push(render_button(button)),
            NavItem::Gap => parts.push("…".to_owned()),
        }
    }
    parts.push(render_button(&controls.jump));
    parts.push(render_button(&controls.next));
    parts.join(" ")
}

/// List the custom IDs a user can send back to activate each enabled control.
pub fn render_action_hints(controls: &NavControls) -> String {
    let mut out = String::from("actions:");
    let enabled = std::iter::once(&controls.previous)
        .chain(controls.items.iter().filter_map(|item| match item {
            NavItem::Page(button) if !button.active => Some(button),
            _ => None,
        }))
        .chain([&controls.jump, &controls.next])
        .filter(|button| !button.disabled);

    for button in enabled {
        let _ = write!(out, " {}={}", button.label.trim(), button.custom_id);
    }
    out
}

fn render_button(button: &NavButton) -> String {
    if button.active {
        format!("({})", button.label)
    } else if button.disabled {
        format!("{{{}}}", button.label)
    } else {
        format!("[{}]", button.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<String> {
        (1..=count).map(|index| format!("entry #{index}")).collect()
    }

    #[test]
    fn list_view_clamps_and_slices() {
        let view = build_paginated_list_view("help", "Commands", &items(12), 9, 5);
        assert_eq!(view.card.footer.as_deref(), Some("Page 3/3"));
        assert_eq!(view.card.description, "- entry #11\n- entry #12");
        assert!(view.controls.is_some());
    }

    #[test]
    fn short_list_has_no_controls() {
        let view = build_paginated_list_view("help", "Commands", &items(3), 1, 5);
        assert_eq!(view.controls, None);
        assert!(!view.to_text().contains("actions:"));
    }

    #[test]
    fn control_row_marks_current_and_disabled_buttons() {
        let view = build_paginated_list_view("help", "Commands", &items(100), 1, 10);
        let controls = view.controls.expect("controls");
        assert_eq!(
            render_nav_controls(&controls),
            "{◀ Prev} (1) [2] [3] … [10] [*] [Next ▶]"
        );
    }

    #[test]
    fn hints_skip_disabled_and_current_buttons() {
        let view = build_paginated_list_view("help", "Commands", &items(30), 3, 10);
        let hints = render_action_hints(&view.controls.expect("controls"));
        assert_eq!(
            hints,
            "actions: ◀ Prev=pg:help:prev:2:3 1=pg:help:page:1:3 2=pg:help:page:2:3 \
             *=pg:help:jump:3:3"
        );
    }

    #[test]
    fn view_serializes_for_external_renderers() {
        let view = build_paginated_list_view("help", "Commands", &items(30), 2, 10);
        let json = serde_json::to_value(&view).expect("serializable view");
        assert_eq!(json["card"]["footer"], "Page 2/3");
        assert_eq!(json["controls"]["items"][1]["kind"], "page");
        assert_eq!(json["controls"]["items"][1]["active"], true);
    }
}
