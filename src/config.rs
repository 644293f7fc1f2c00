//! Run configuration with sensible defaults.
//!
//! [`RunConfig`] controls the query, result/worker caps, timeouts, and
//! output location for one batch run. Field ranges mirror the CLI
//! contract: `max_results` and `max_workers` are both clamped to 1–30.

use crate::error::ScrapeError;
use std::time::Duration;

/// Base URL of the Microsoft Learn search API.
pub const SEARCH_API_URL: &str = "https://learn.microsoft.com/api/search";

/// Hostname substring that marks an in-content link as trusted.
pub const TRUSTED_DOMAIN: &str = "learn.microsoft.com";

/// Configuration for one scrape run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The search query sent to the Learn API.
    pub query: String,
    /// Maximum number of search results to request (1–30).
    pub max_results: usize,
    /// Width of the concurrent fetch pool (1–30).
    pub max_workers: usize,
    /// Per-HTTP-request timeout for search and page fetches.
    pub request_timeout: Duration,
    /// Wall-clock budget for one whole extraction task (fetch + parse +
    /// convert). Independent of `request_timeout`.
    pub task_timeout: Duration,
    /// Output file name; must end in `.json`.
    pub output_file: String,
    /// Output folder; must end in `/`. Created if missing.
    pub output_folder: String,
    /// Base URL of the search endpoint. Overridable for tests.
    pub search_url: String,
}

impl RunConfig {
    /// Build a config for `query` with the standard defaults.
    ///
    /// The output file name defaults to the query with spaces replaced
    /// by underscores, plus `.json`.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let output_file = default_output_file(&query);
        Self {
            query,
            max_results: 15,
            max_workers: 5,
            request_timeout: Duration::from_secs(10),
            task_timeout: Duration::from_secs(30),
            output_file,
            output_folder: "articles/".into(),
            search_url: SEARCH_API_URL.into(),
        }
    }

    /// Validates this configuration, returning an error if any field is
    /// out of range.
    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.query.trim().is_empty() {
            return Err(ScrapeError::Config("query must not be empty".into()));
        }
        if !(1..=30).contains(&self.max_results) {
            return Err(ScrapeError::Config(
                "max_results must be between 1 and 30".into(),
            ));
        }
        if !(1..=30).contains(&self.max_workers) {
            return Err(ScrapeError::Config(
                "max_workers must be between 1 and 30".into(),
            ));
        }
        if !self.output_file.ends_with(".json") {
            return Err(ScrapeError::Config(
                "output_file must end with .json".into(),
            ));
        }
        if !self.output_folder.ends_with('/') {
            return Err(ScrapeError::Config(
                "output_folder must end with /".into(),
            ));
        }
        if self.request_timeout.is_zero() || self.task_timeout.is_zero() {
            return Err(ScrapeError::Config("timeouts must be non-zero".into()));
        }
        Ok(())
    }
}

/// Derive the default output file name from a query.
pub fn default_output_file(query: &str) -> String {
    format!("{}.json", query.replace(' ', "_"))
}
