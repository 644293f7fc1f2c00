//! Batch fetch coordinator: bounded concurrent fan-out over search results.
//!
//! Drives the content extractor over every search result with a fixed
//! pool width, a per-task wall-clock budget, and per-task failure
//! isolation. One slow or failing page never aborts the batch; the output
//! is whatever succeeded, collected in completion order.

use crate::config::RunConfig;
use crate::extract::fetch_and_extract;
use crate::types::{Article, ExtractOutcome, SearchResult};
use futures::{stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Run the extraction batch over `results`.
///
/// All tasks are submitted up front; at most `config.max_workers` run
/// concurrently (`buffer_unordered` queues the rest). Each task is
/// wrapped in a `config.task_timeout` budget covering fetch, parse, and
/// conversion together — independent of the per-request HTTP timeout.
/// When the budget fires the task future is dropped, which also cancels
/// any in-flight request; the result is discarded, not retried.
///
/// Returns the successfully extracted articles in completion order,
/// which varies between runs. `output.len() <= results.len()` always
/// holds.
pub async fn run_batch(
    client: &reqwest::Client,
    results: Vec<SearchResult>,
    config: &RunConfig,
) -> Vec<Article> {
    if results.is_empty() {
        return Vec::new();
    }

    let total = results.len() as u64;
    let progress = progress_bar(total);
    let task_timeout = config.task_timeout;

    let outcomes = stream::iter(results.into_iter().map(|item| {
        let client = client.clone();
        async move {
            let url = item.link;
            let outcome = tokio::time::timeout(task_timeout, fetch_and_extract(&client, &url)).await;
            (url, outcome)
        }
    }))
    .buffer_unordered(config.max_workers);

    let articles = outcomes
        .fold(Vec::new(), |mut articles, (url, outcome)| {
            progress.inc(1);
            match outcome {
                Ok(ExtractOutcome::Extracted(article)) => articles.push(article),
                // Skips were already logged by the extractor with their reason.
                Ok(ExtractOutcome::Skipped { .. }) => {}
                Err(_) => {
                    tracing::warn!(url, timeout = ?task_timeout, "task exceeded time budget");
                }
            }
            async move { articles }
        })
        .await;

    progress.finish_and_clear();
    tracing::info!(
        extracted = articles.len(),
        total,
        "batch complete"
    );
    articles
}

/// Progress bar for the batch, one tick per terminal task state.
fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("Processing articles {bar:40} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
