//! Shared HTTP client for search and page fetch requests.
//!
//! Provides a configured [`reqwest::Client`] with a per-request timeout
//! and a stable User-Agent. One client is built per run and reused for
//! the search call and every page fetch, sharing its connection pool.

use crate::config::RunConfig;
use crate::error::ScrapeError;

/// User-Agent sent on every request.
const USER_AGENT: &str = concat!("learn-scraper/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for one run.
///
/// The client has:
/// - Timeout from `config.request_timeout` (applies per request)
/// - Gzip and brotli decompression
/// - A bounded redirect policy
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] if the client cannot be constructed.
pub fn build_client(config: &RunConfig) -> Result<reqwest::Client, ScrapeError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ScrapeError::Http(format!("failed to build HTTP client: {e}")))
}
