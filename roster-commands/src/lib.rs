pub mod tables;
pub mod utility;

use serde::Serialize;
use tracing::debug;

use roster_core::Context;
use roster_utils::COMMAND_PREFIX;
use roster_utils::pagination::PaginatedView;
use roster_utils::pagination::token::parse_jump_submission;

use tables::navigation;
use tables::test_series::{self, TestSeriesTable};
use tables::users::{self, UsersTable};
use tables::{ListingTable, Step};

/// What a command hands back to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Reply {
    Text(String),
    View(PaginatedView),
}

impl Reply {
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::View(view) => view.to_text(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InteractionRoute {
    UsersButtons,
    TestSeriesButtons,
    HelpButtons,
    UsersJump,
    TestSeriesJump,
    HelpJump,
}

fn route_interaction(custom_id: &str) -> Option<InteractionRoute> {
    const ROUTES: [(&str, InteractionRoute); 6] = [
        ("pg:users:", InteractionRoute::UsersButtons),
        ("pg:tests:", InteractionRoute::TestSeriesButtons),
        ("pg:help:", InteractionRoute::HelpButtons),
        ("pgm:users:", InteractionRoute::UsersJump),
        ("pgm:tests:", InteractionRoute::TestSeriesJump),
        ("pgm:help:", InteractionRoute::HelpJump),
    ];

    ROUTES
        .into_iter()
        .find_map(|(prefix, route)| custom_id.starts_with(prefix).then_some(route))
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    users::META,
    test_series::META,
    navigation::SIZE_META,
    navigation::NEXT_META,
    navigation::PREV_META,
    utility::help::META,
    utility::usage::META,
    // Add new commands here
];

/// Handle a prefixed command line such as `!users 3`.
///
/// Returns `None` when the line is not a command, or when its fetch was
/// superseded by a newer one.
pub async fn handle_message(ctx: Context, content: &str) -> anyhow::Result<Option<Reply>> {
    let content = content.trim();

    if !content.starts_with(COMMAND_PREFIX) {
        return Ok(None);
    }

    let content = content.trim_start_matches(COMMAND_PREFIX).trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (arg1, arg_tail): (Option<&str>, Option<&str>) = match rest {
        Some(value) => {
            let mut args = value.splitn(2, char::is_whitespace);
            let first = args.next().filter(|arg| !arg.is_empty());
            let tail = args
                .next()
                .map(str::trim)
                .filter(|remaining| !remaining.is_empty());

            (first, tail)
        }
        None => (None, None),
    };

    let reply = match cmd.as_str() {
        "users" => run_listing::<UsersTable>(&ctx, arg1).await,
        "tests" => run_listing::<TestSeriesTable>(&ctx, arg1).await,
        "size" => navigation::run_size(&ctx, arg1, arg_tail).await,
        "next" => navigation::run_step(&ctx, Step::Next, arg1).await,
        "prev" => navigation::run_step(&ctx, Step::Previous, arg1).await,
        "help" => Some(utility::help::run(arg1)),
        "usage" => Some(utility::usage::run(arg1)),
        // Add new commands here
        _ => {
            debug!(command = %cmd, "ignoring unknown command");
            None
        }
    };

    Ok(reply)
}

/// Handle activation of a control (its custom ID) or a jump-prompt submission.
pub async fn handle_interaction(ctx: Context, custom_id: &str) -> anyhow::Result<Option<Reply>> {
    let custom_id = custom_id.trim();
    let Some(route) = route_interaction(custom_id) else {
        return Ok(None);
    };

    let reply = match route {
        InteractionRoute::UsersButtons => {
            tables::handle_pagination_interaction::<UsersTable>(&ctx, custom_id).await
        }
        InteractionRoute::TestSeriesButtons => {
            tables::handle_pagination_interaction::<TestSeriesTable>(&ctx, custom_id).await
        }
        InteractionRoute::HelpButtons => {
            Some(utility::help::handle_pagination_interaction(custom_id))
        }
        InteractionRoute::UsersJump
        | InteractionRoute::TestSeriesJump
        | InteractionRoute::HelpJump => {
            let Some(submission) = parse_jump_submission(custom_id) else {
                return Ok(Some(Reply::Text(
                    "Please enter a valid page number.".to_owned(),
                )));
            };
            match route {
                InteractionRoute::UsersJump => {
                    tables::handle_jump_submission::<UsersTable>(&ctx, &submission).await
                }
                InteractionRoute::TestSeriesJump => {
                    tables::handle_jump_submission::<TestSeriesTable>(&ctx, &submission).await
                }
                _ => Some(utility::help::handle_jump_submission(&submission)),
            }
        }
    };

    Ok(reply)
}

/// `!users [page]` and `!tests [page]`: refresh the current page unless one is given.
async fn run_listing<T: ListingTable>(ctx: &Context, arg1: Option<&str>) -> Option<Reply> {
    match arg1 {
        None => tables::show_page::<T>(ctx, current_page::<T>(ctx).await).await,
        Some(raw) => match roster_utils::parse::parse_signed_page(raw) {
            Some(page) => tables::show_page::<T>(ctx, page).await,
            None => Some(Reply::Text(format!(
                "Usage: `!{} [page]` (page starts at 1)",
                T::INFO.name
            ))),
        },
    }
}

async fn current_page<T: ListingTable>(ctx: &Context) -> i64 {
    let page = T::handle(ctx).view().await.pagination().current_page();
    i64::try_from(page).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roster_core::config::Settings;
    use roster_database::{InstitutionalStore, sample_test_series, sample_users};

    use super::*;

    fn context() -> (Context, InstitutionalStore) {
        let store = InstitutionalStore::new(sample_users(47), sample_test_series(23));
        let ctx = Context::new(
            Settings::default(),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        );
        (ctx, store)
    }

    fn footer(reply: Option<Reply>) -> String {
        match reply {
            Some(Reply::View(view)) => view.card.footer.unwrap_or_default(),
            other => panic!("expected a table view, got {other:?}"),
        }
    }

    fn text(reply: Option<Reply>) -> String {
        match reply {
            Some(Reply::Text(text)) => text,
            other => panic!("expected a text reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn plain_chat_and_unknown_commands_are_ignored() {
        let (ctx, _) = context();
        assert_eq!(handle_message(ctx.clone(), "hello").await.unwrap(), None);
        assert_eq!(handle_message(ctx, "!grades").await.unwrap(), None);
    }

    #[tokio::test]
    async fn requested_page_is_clamped_to_the_last_one() {
        let (ctx, _) = context();
        handle_message(ctx.clone(), "!users").await.unwrap();
        let reply = handle_message(ctx, "!users 99").await.unwrap();
        assert_eq!(
            footer(reply),
            "Page 5/5 • Showing 41 to 47 of 47 users • 10 per page"
        );
    }

    #[tokio::test]
    async fn page_size_change_returns_to_the_first_page() {
        let (ctx, _) = context();
        handle_message(ctx.clone(), "!users").await.unwrap();
        handle_message(ctx.clone(), "!users 4").await.unwrap();
        let reply = handle_message(ctx, "!size users 20").await.unwrap();
        assert_eq!(
            footer(reply),
            "Page 1/3 • Showing 1 to 20 of 47 users • 20 per page"
        );
    }

    #[tokio::test]
    async fn unsupported_page_size_is_rejected() {
        let (ctx, _) = context();
        let reply = handle_message(ctx, "!size tests 7").await.unwrap();
        assert_eq!(text(reply), "Page size must be one of 5, 10, 20, 50.");
    }

    #[tokio::test]
    async fn next_and_prev_step_through_pages() {
        let (ctx, _) = context();
        handle_message(ctx.clone(), "!tests").await.unwrap();
        handle_message(ctx.clone(), "!next tests").await.unwrap();
        let reply = handle_message(ctx.clone(), "!next tests").await.unwrap();
        assert!(footer(reply).starts_with("Page 3/3"));

        let reply = handle_message(ctx.clone(), "!next tests").await.unwrap();
        assert!(footer(reply).starts_with("Page 3/3"));

        let reply = handle_message(ctx, "!prev tests").await.unwrap();
        assert!(footer(reply).starts_with("Page 2/3"));
    }

    #[tokio::test]
    async fn control_tokens_navigate_their_table() {
        let (ctx, _) = context();
        handle_message(ctx.clone(), "!users").await.unwrap();
        let reply = handle_interaction(ctx.clone(), "pg:users:next:2:5")
            .await
            .unwrap();
        assert!(footer(reply).starts_with("Page 2/5"));

        let reply = handle_interaction(ctx.clone(), "pg:users:bogus")
            .await
            .unwrap();
        assert_eq!(text(reply), tables::PAGINATION_INVALID_MESSAGE);

        assert_eq!(
            handle_interaction(ctx, "pg:grades:next:2:5").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn jump_control_prompts_and_submission_lands() {
        let (ctx, _) = context();
        handle_message(ctx.clone(), "!users").await.unwrap();

        let prompt = text(handle_interaction(ctx.clone(), "pg:users:jump:1:5").await.unwrap());
        assert!(prompt.contains("`pgm:users:5 <page>`"));

        let reply = handle_interaction(ctx.clone(), "pgm:users:5 3").await.unwrap();
        assert!(footer(reply).starts_with("Page 3/5"));

        let reply = handle_interaction(ctx.clone(), "pgm:users:5 -4").await.unwrap();
        assert!(footer(reply).starts_with("Page 1/5"));

        let reply = handle_interaction(ctx, "pgm:users:5 three").await.unwrap();
        assert_eq!(text(reply), "Please enter a valid page number.");
    }

    #[tokio::test]
    async fn provider_failure_shows_an_error_banner() {
        let (ctx, store) = context();
        handle_message(ctx.clone(), "!users").await.unwrap();
        store.set_outage(Some("database offline".into())).await;

        let Some(Reply::View(view)) = handle_message(ctx, "!users 3").await.unwrap() else {
            panic!("expected a table view");
        };
        assert!(
            view.card
                .description
                .contains("Error loading data: database offline")
        );
        assert_eq!(
            view.card.footer.as_deref(),
            Some("Page 1/5 • Showing 1 to 10 of 47 users • 10 per page")
        );
    }

    #[test]
    fn replies_serialize_with_a_kind_tag() {
        let json = serde_json::to_value(Reply::Text("hi".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "text", "body": "hi" }));
    }
}
