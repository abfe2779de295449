use roster_utils::pagination::token::{JumpSubmission, NavAction, validate_custom_id};
use roster_utils::pagination::{
    PaginatedView, build_paginated_list_view, clamp_page, resolve_jump_target_page, total_pages,
};

use crate::tables::{PAGINATION_INVALID_MESSAGE, jump_prompt};
use crate::{COMMANDS, CommandMeta, Reply};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help [page]",
};

const HELP_COMMANDS_PER_PAGE: usize = 5;
const HELP_TABLE: &str = "help";
const HELP_TITLE: &str = "Commands";

/// Render the command catalog at `arg1` (page), defaulting to page 1.
pub fn run(arg1: Option<&str>) -> Reply {
    let Some(requested_page) = roster_utils::pagination::parse_one_based_page(arg1) else {
        return Reply::Text(format!("Usage: `{}` (page starts at 1)", META.usage));
    };

    let lines = command_lines();
    let total = total_pages(lines.len(), HELP_COMMANDS_PER_PAGE);
    if requested_page > total {
        return Reply::Text(format!(
            "Page {requested_page} does not exist. Available pages: 1-{total}."
        ));
    }

    Reply::View(help_view(&lines, requested_page))
}

/// Handle navigation controls of the help listing.
pub fn handle_pagination_interaction(custom_id: &str) -> Reply {
    let Ok(token) = validate_custom_id(custom_id, HELP_TABLE) else {
        return Reply::Text(PAGINATION_INVALID_MESSAGE.to_owned());
    };

    let lines = command_lines();
    let total = total_pages(lines.len(), HELP_COMMANDS_PER_PAGE);

    if token.action == NavAction::Jump {
        return Reply::Text(jump_prompt(HELP_TABLE, total));
    }

    Reply::View(help_view(&lines, clamp_page(token.page, total)))
}

/// Handle a jump-prompt submission for the help listing.
pub fn handle_jump_submission(submission: &JumpSubmission) -> Reply {
    let lines = command_lines();
    let total = total_pages(lines.len(), HELP_COMMANDS_PER_PAGE);
    let target = resolve_jump_target_page(
        submission.entered_page,
        total,
        submission.total_pages_hint,
    );
    Reply::View(help_view(&lines, target))
}

fn help_view(lines: &[String], page: usize) -> PaginatedView {
    build_paginated_list_view(HELP_TABLE, HELP_TITLE, lines, page, HELP_COMMANDS_PER_PAGE)
}

fn command_lines() -> Vec<String> {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_by(|a, b| a.category.cmp(b.category).then(a.name.cmp(b.name)));
    commands
        .into_iter()
        .map(|command| format!("`{}` - {}", command.usage, command.desc))
        .collect()
}
