//! Microsoft Learn search API client.
//!
//! Issues one GET against the Learn search endpoint and maps the JSON
//! response into [`SearchResult`] work items. Transport failures and
//! error statuses are logged and collapse to an empty result list — a
//! run with zero results is valid, just unproductive. A response that
//! parses but is missing expected fields is a hard [`ScrapeError::Parse`]
//! failure, since the rest of the run has nothing trustworthy to work on.

use crate::config::RunConfig;
use crate::error::{Result, ScrapeError};
use crate::types::SearchResult;
use serde::Deserialize;

/// Raw shape of the Learn search API response. Only the fields we map
/// are declared; everything else in the body is ignored.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<RawResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    url: String,
    title: String,
    description: String,
    last_updated_date: String,
}

/// Search the Learn documentation index.
///
/// Sends one GET with the query, an `en-us` locale, and an OData filter
/// restricting results to the Documentation category, capped at
/// `config.max_results`.
///
/// Any transport failure or non-2xx status is logged at warn level and
/// returns `Ok(vec![])` — callers must treat an empty list as a normal
/// outcome.
///
/// # Errors
///
/// Returns [`ScrapeError::Parse`] if the response body is not the
/// expected JSON shape (missing `results` or missing fields on a result).
pub async fn search(client: &reqwest::Client, config: &RunConfig) -> Result<Vec<SearchResult>> {
    tracing::debug!(query = %config.query, max_results = config.max_results, "Learn search");

    let top = config.max_results.to_string();
    let response = match client
        .get(&config.search_url)
        .query(&[
            ("search", config.query.as_str()),
            ("locale", "en-us"),
            ("facet", "category"),
            ("$filter", "category eq 'Documentation'"),
            ("$top", top.as_str()),
        ])
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
    {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, "search request failed");
            return Ok(Vec::new());
        }
    };

    let body = response
        .text()
        .await
        .map_err(|e| ScrapeError::Http(format!("search response read failed: {e}")))?;

    parse_search_response(&body)
}

/// Parse the search API JSON body into results.
///
/// Extracted as a separate function for testability with fixture JSON.
fn parse_search_response(body: &str) -> Result<Vec<SearchResult>> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| ScrapeError::Parse(format!("unexpected search response: {e}")))?;

    let results: Vec<SearchResult> = response
        .results
        .into_iter()
        .map(|raw| SearchResult {
            link: raw.url,
            title: raw.title,
            description: raw.description,
            updated: raw.last_updated_date,
        })
        .collect();

    tracing::debug!(count = results.len(), "search results parsed");
    Ok(results)
}
