//! Stable facade for pagination helpers used by table views.

mod components;
mod page;
mod sequence;
mod state;
pub mod token;
mod view;

pub use components::{NavButton, NavControls, NavItem, build_nav_controls};
pub use page::{
    DEFAULT_WINDOW_RADIUS, PageIndicator, clamp_page, clamp_signed_page, page_indicators,
    page_window, paginated_bulleted_description, parse_one_based_page, resolve_jump_target_page,
    total_pages,
};
pub use sequence::{RequestSequencer, RequestTicket};
pub use state::{PaginationMeta, PaginationState};
pub use view::{
    PaginatedView, build_paginated_list_view, build_paginated_view,
    build_paginated_view_with_footer_note, render_action_hints, render_nav_controls,
};
