use std::sync::Arc;

use anyhow::Context as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use roster_commands::{Reply, handle_interaction, handle_message, tables};
use roster_core::Context;
use roster_core::config::{OutputFormat, Settings};
use roster_database::{InstitutionalStore, sample_test_series, sample_users};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let output = settings.output;

    let store = open_store(&settings).await?;
    let ctx = Context::new(settings, Arc::new(store.clone()), Arc::new(store));

    // Load both tables so page totals are known before the first command
    ctx.test_series.refresh().await;
    if let Some(reply) = tables::show_page::<tables::users::UsersTable>(&ctx, 1).await {
        emit(&reply, output);
    }

    info!("Roster dashboard is listening on stdin...");
    serve_lines(ctx, BufReader::new(tokio::io::stdin()), move |reply| {
        emit(&reply, output)
    })
    .await?;

    info!("stdin closed, shutting down");
    Ok(()) // Return Success, shutdown cleanly
}

/// Build the store from the fixture directory, or from generated samples.
async fn open_store(settings: &Settings) -> anyhow::Result<InstitutionalStore> {
    let store = match &settings.fixture_dir {
        Some(dir) => {
            let users_path = dir.join("users.json");
            let test_series_path = dir.join("test_series.json");
            let users = tokio::fs::read_to_string(&users_path)
                .await
                .with_context(|| format!("failed to read {}", users_path.display()))?;
            let test_series = tokio::fs::read_to_string(&test_series_path)
                .await
                .with_context(|| format!("failed to read {}", test_series_path.display()))?;

            info!(dir = %dir.display(), "loading store fixtures");
            InstitutionalStore::from_json(&users, &test_series)
                .with_context(|| format!("invalid fixtures in {}", dir.display()))?
        }
        None => {
            info!(
                users = settings.sample_users,
                test_series = settings.sample_test_series,
                "generating sample records"
            );
            InstitutionalStore::new(
                sample_users(settings.sample_users),
                sample_test_series(settings.sample_test_series),
            )
        }
    };

    Ok(store.with_latency(settings.fetch_latency))
}

/// Handle every input line on its own task, then wait for all of them.
///
/// Each line is either a `!command` or a control token / jump submission.
async fn serve_lines<R, F>(ctx: Context, reader: R, sink: F) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    F: Fn(Reply) + Clone + Send + 'static,
{
    let mut tasks = JoinSet::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_owned();
        if line.is_empty() {
            continue;
        }

        let ctx = ctx.clone();
        let sink = sink.clone();
        tasks.spawn(async move {
            let result = if line.starts_with(roster_utils::COMMAND_PREFIX) {
                handle_message(ctx, &line).await
            } else {
                handle_interaction(ctx, &line).await
            };

            match result {
                Ok(Some(reply)) => sink(reply),
                Ok(None) => {}
                Err(source) => error!(?source, input = %line, "failed to handle input"),
            }
        });
    }

    while let Some(joined) = tasks.join_next().await {
        if let Err(source) = joined {
            error!(?source, "input handler task failed");
        }
    }
    Ok(())
}

fn emit(reply: &Reply, output: OutputFormat) {
    match output {
        OutputFormat::Text => println!("{}\n", reply.to_text()),
        OutputFormat::Json => match serde_json::to_string(reply) {
            Ok(json) => println!("{json}"),
            Err(source) => error!(?source, "failed to serialize reply"),
        },
    }
}
