//! Article content extraction — fetch a Learn page and reduce it to text.
//!
//! Fetches one article URL, parses the HTML, and renders the main content
//! container to a markdown-like plain text representation. Cleaning rules:
//!
//! - The title is the first `<h1>` on the page; a page without one gets an
//!   empty title rather than a failure.
//! - The body is the **last** element matching `div.content`. No matching
//!   container is a structural failure and the page is skipped.
//! - Inline `code` elements and tabbed groups (`.tabGroup`) are dropped
//!   entirely, tag and contents.
//! - Hyperlinks whose host is not on the trusted Learn domain are
//!   unwrapped: the visible text stays, the link itself is discarded.
//!   Trusted links are kept as markdown links.
//!
//! Every failure mode folds into [`ExtractOutcome::Skipped`] so one bad
//! page never aborts a batch.

use crate::config::TRUSTED_DOMAIN;
use crate::error::{Result, ScrapeError};
use crate::types::{Article, ExtractOutcome};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Fetch `url` and extract its article content.
///
/// Transport failures, error statuses, and structural parse failures all
/// yield [`ExtractOutcome::Skipped`] with a logged reason — never an `Err`.
pub async fn fetch_and_extract(client: &reqwest::Client, url: &str) -> ExtractOutcome {
    let response = match client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
    {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(url, error = %err, "page fetch failed");
            return ExtractOutcome::Skipped {
                url: url.to_owned(),
                reason: format!("fetch failed: {err}"),
            };
        }
    };

    let html = match response.text().await {
        Ok(html) => html,
        Err(err) => {
            tracing::warn!(url, error = %err, "page body read failed");
            return ExtractOutcome::Skipped {
                url: url.to_owned(),
                reason: format!("body read failed: {err}"),
            };
        }
    };

    match extract_article(&html, url) {
        Ok(article) => ExtractOutcome::Extracted(article),
        Err(err) => {
            tracing::warn!(url, error = %err, "extraction failed");
            ExtractOutcome::Skipped {
                url: url.to_owned(),
                reason: err.to_string(),
            }
        }
    }
}

/// Extract an [`Article`] from raw HTML.
///
/// Separated from the fetch for testability with fixture HTML.
///
/// # Errors
///
/// Returns [`ScrapeError::Parse`] if the page has no `div.content`
/// container.
pub fn extract_article(html: &str, url: &str) -> Result<Article> {
    let document = Html::parse_document(html);

    let h1_sel = Selector::parse("h1")
        .map_err(|e| ScrapeError::Parse(format!("invalid title selector: {e:?}")))?;
    let content_sel = Selector::parse("div.content")
        .map_err(|e| ScrapeError::Parse(format!("invalid content selector: {e:?}")))?;

    let title = document
        .select(&h1_sel)
        .next()
        .map(|el| inline_text(el))
        .unwrap_or_default();

    // Selection policy: the last matching container on the page. Learn
    // pages nest a chrome-level div.content around the article one.
    let content = document
        .select(&content_sel)
        .last()
        .ok_or_else(|| ScrapeError::Parse("no content container".into()))?;

    let mut rendered = String::new();
    render_element(content, &mut rendered);

    Ok(Article {
        title,
        content: normalise_whitespace(&rendered),
        reference: url.to_owned(),
    })
}

/// Elements dropped entirely, tag and contents.
fn is_removed(element: &ElementRef<'_>) -> bool {
    let name = element.value().name();
    if name == "code" || name == "script" || name == "style" {
        return true;
    }
    element
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == "tabGroup"))
}

/// Returns true when `href` points at the trusted Learn domain.
///
/// Relative links and unparseable hrefs have no host and count as
/// untrusted, matching the "unwrap anything that doesn't point back"
/// cleaning rule.
fn is_trusted_link(href: &str) -> bool {
    Url::parse(href)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.contains(TRUSTED_DOMAIN)))
        .unwrap_or(false)
}

/// Render one element's subtree into markdown-like text.
fn render_element(element: ElementRef<'_>, out: &mut String) {
    if is_removed(&element) {
        return;
    }

    match element.value().name() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = element.value().name().as_bytes()[1] - b'0';
            ensure_block_break(out);
            for _ in 0..level {
                out.push('#');
            }
            out.push(' ');
            out.push_str(&inline_text(element));
            ensure_block_break(out);
        }
        "p" => {
            ensure_block_break(out);
            render_children(element, out);
            ensure_block_break(out);
        }
        "li" => {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("* ");
            render_children(element, out);
            out.push('\n');
        }
        "br" => out.push('\n'),
        "a" => {
            let text = inline_text(element);
            if text.is_empty() {
                return;
            }
            match element.value().attr("href") {
                Some(href) if is_trusted_link(href) => {
                    out.push('[');
                    out.push_str(&text);
                    out.push_str("](");
                    out.push_str(href);
                    out.push(')');
                }
                // Untrusted or missing target: keep the text, drop the link.
                _ => out.push_str(&text),
            }
        }
        _ => render_children(element, out),
    }
}

/// Render an element's child nodes in document order.
fn render_children(element: ElementRef<'_>, out: &mut String) {
    for node in element.children() {
        if let Some(child) = ElementRef::wrap(node) {
            render_element(child, out);
        } else if let Some(text) = node.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Collect an element's visible text with whitespace collapsed, skipping
/// removed subtrees.
fn inline_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if is_removed(&element) {
        return;
    }
    for node in element.children() {
        if let Some(child) = ElementRef::wrap(node) {
            collect_text(child, out);
        } else if let Some(text) = node.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Collapse runs of spaces, trim line edges, and cap blank runs at one
/// empty line.
fn normalise_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_run = 0usize;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            blank_run += 1;
            if blank_run == 1 && !lines.is_empty() {
                lines.push(String::new());
            }
        } else {
            blank_run = 0;
            lines.push(collapsed);
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Append a paragraph break unless the output already ends with one.
fn ensure_block_break(out: &mut String) {
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}
