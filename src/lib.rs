//! # learn-scraper
//!
//! Batch fetcher for Microsoft Learn documentation: one invocation
//! searches the Learn index, fetches the matching article pages
//! concurrently, strips each down to its readable content, and writes
//! the aggregate as a JSON file.
//!
//! ## Design
//!
//! - One search request against the public Learn search API
//! - Bounded-concurrency fan-out over the results with a per-task
//!   wall-clock budget
//! - Per-page failure isolation: a slow or broken page is logged and
//!   dropped, never fatal to the batch
//! - No retries, no persistence across runs, no rate limiting — a
//!   failed page is simply absent from the output
//!
//! ## Output
//!
//! Pretty-printed UTF-8 JSON of shape
//! `{"articles": [{"title", "content", "reference"}, ...]}`, ordered by
//! task completion (not search order).

pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod http;
pub mod output;
pub mod search;
pub mod types;

pub use config::RunConfig;
pub use error::{Result, ScrapeError};
pub use types::{Article, ExtractOutcome, RunResult, SearchResult};

/// Run one full search-and-scrape batch.
///
/// Sequences search → concurrent extraction and returns the collected
/// articles. Returns an empty result without spawning any fetch tasks
/// when the search comes back empty; writing the output file is the
/// caller's decision (see [`output::write_results`]).
///
/// # Errors
///
/// Returns [`ScrapeError::Config`] for an invalid configuration and
/// [`ScrapeError::Parse`] if the search API response is malformed.
/// Per-page failures never surface here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> learn_scraper::Result<()> {
/// let config = learn_scraper::RunConfig::new("azure functions");
/// let result = learn_scraper::run(&config).await?;
/// println!("{} articles", result.articles.len());
/// # Ok(())
/// # }
/// ```
pub async fn run(config: &RunConfig) -> Result<RunResult> {
    config.validate()?;

    let client = http::build_client(config)?;
    let results = search::search(&client, config).await?;

    if results.is_empty() {
        tracing::info!("no search results found");
        return Ok(RunResult::default());
    }

    tracing::info!(count = results.len(), "fetching articles");
    let articles = batch::run_batch(&client, results, config).await;

    Ok(RunResult { articles })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_rejects_invalid_config() {
        let mut config = RunConfig::new("rust");
        config.max_workers = 0;
        let result = run(&config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_workers"));
    }

    #[tokio::test]
    async fn run_rejects_empty_query() {
        let config = RunConfig::new("");
        let result = run(&config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("query"));
    }
}
