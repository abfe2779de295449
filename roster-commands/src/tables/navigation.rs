//! Commands that drive a table's pagination without clicking its controls.

use roster_core::Context;
use roster_utils::parse::{PAGE_SIZE_OPTIONS, parse_page_size};

use super::test_series::TestSeriesTable;
use super::users::UsersTable;
use super::{Step, change_page_size, step_page};
use crate::{CommandMeta, Reply};

pub const SIZE_META: CommandMeta = CommandMeta {
    name: "size",
    desc: "Change rows per page (5, 10, 20 or 50); returns to page 1.",
    category: "tables",
    usage: "!size <users|tests> <rows>",
};

pub const NEXT_META: CommandMeta = CommandMeta {
    name: "next",
    desc: "Go to the next page of a table.",
    category: "tables",
    usage: "!next <users|tests>",
};

pub const PREV_META: CommandMeta = CommandMeta {
    name: "prev",
    desc: "Go to the previous page of a table.",
    category: "tables",
    usage: "!prev <users|tests>",
};

/// Table addressed by a command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Users,
    TestSeries,
}

impl TableKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "users" => Some(Self::Users),
            "tests" => Some(Self::TestSeries),
            _ => None,
        }
    }
}

/// `!size <table> <rows>`
pub async fn run_size(ctx: &Context, arg1: Option<&str>, arg_tail: Option<&str>) -> Option<Reply> {
    let Some(kind) = arg1.and_then(TableKind::parse) else {
        return Some(usage(&SIZE_META));
    };

    let Some(size) = arg_tail.and_then(parse_page_size) else {
        let options: Vec<String> = PAGE_SIZE_OPTIONS.iter().map(ToString::to_string).collect();
        return Some(Reply::Text(format!(
            "Page size must be one of {}.",
            options.join(", ")
        )));
    };

    match kind {
        TableKind::Users => change_page_size::<UsersTable>(ctx, size).await,
        TableKind::TestSeries => change_page_size::<TestSeriesTable>(ctx, size).await,
    }
}

/// `!next <table>` and `!prev <table>`
pub async fn run_step(ctx: &Context, step: Step, arg1: Option<&str>) -> Option<Reply> {
    let Some(kind) = arg1.and_then(TableKind::parse) else {
        let meta = match step {
            Step::Previous => &PREV_META,
            Step::Next => &NEXT_META,
        };
        return Some(usage(meta));
    };

    match kind {
        TableKind::Users => step_page::<UsersTable>(ctx, step).await,
        TableKind::TestSeries => step_page::<TestSeriesTable>(ctx, step).await,
    }
}

fn usage(meta: &CommandMeta) -> Reply {
    Reply::Text(format!("Usage: `{}`", meta.usage))
}
