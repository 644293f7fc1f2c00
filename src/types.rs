//! Core types for search results, extracted articles, and run output.

use serde::{Deserialize, Serialize};

/// A single result returned by the Microsoft Learn search API.
///
/// A lightweight reference to an article — the page itself has not been
/// fetched yet. URLs are not deduplicated; each result is one work item
/// for the batch coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The URL of the documentation article.
    pub link: String,
    /// The article title as reported by the search index.
    pub title: String,
    /// A short description of the article.
    pub description: String,
    /// When the article was last updated, as reported by the index.
    pub updated: String,
}

/// A fetched article reduced to its readable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// The article's `<h1>` heading; empty if the page has none.
    pub title: String,
    /// Cleaned markdown-like text of the article body.
    pub content: String,
    /// The URL the article was fetched from.
    pub reference: String,
}

/// The outcome of extracting one URL.
///
/// Extraction never aborts the batch: every failure mode is folded into
/// [`ExtractOutcome::Skipped`] with a reason, so the coordinator can log
/// it and move on.
#[derive(Debug, Clone)]
pub enum ExtractOutcome {
    /// The page was fetched and reduced to an [`Article`].
    Extracted(Article),
    /// The page contributed nothing: transport failure, bad status, or
    /// no recognisable content container.
    Skipped {
        /// The URL that was skipped.
        url: String,
        /// Human-readable reason, already suitable for logging.
        reason: String,
    },
}

/// The final persisted artifact of a run.
///
/// Article order is completion order of the concurrent fetch tasks, not
/// search-result order — it varies between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Successfully extracted articles, in completion order.
    pub articles: Vec<Article>,
}
