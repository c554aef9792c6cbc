//! Bing and Google web search, used to find PDF spec sheets.
//!
//! Both engines render each organic hit as an `<h2>` containing a link.
//! Google may wrap result links in a `/url?q=<target>&...` redirect.

use scraper::{Html, Selector};
use tracing::debug;

use crate::discovery::SearchError;

/// Bing web search URL.
const BING_SEARCH_URL: &str = "https://www.bing.com/search";

/// Google web search URL.
const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Results per page on both engines.
const RESULTS_PER_PAGE: usize = 10;

/// A web search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResult {
    pub title: String,
    pub href: String,
}

/// Result page URLs for `query`: `max_pages` Bing pages, then `max_pages`
/// Google pages.
pub fn web_search_urls(query: &str, max_pages: usize) -> Result<Vec<String>, SearchError> {
    let mut urls = Vec::with_capacity(max_pages * 2);

    for page in 0..max_pages {
        let first = (page * RESULTS_PER_PAGE + 1).to_string();
        urls.push(build_url(
            BING_SEARCH_URL,
            &[("q", query), ("form", "HDRSC2"), ("first", &first)],
        )?);
    }

    for page in 0..max_pages {
        let start = (page * RESULTS_PER_PAGE).to_string();
        urls.push(build_url(GOOGLE_SEARCH_URL, &[("q", query), ("start", &start)])?);
    }

    Ok(urls)
}

fn build_url(base: &str, params: &[(&str, &str)]) -> Result<String, SearchError> {
    url::Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| SearchError::Url(e.to_string()))
}

/// Parse `h2 > a` hits from a results page, in page order.
///
/// Only the first link inside each heading is considered. Hits without text
/// or with an unusable href are skipped.
pub fn parse_web_results(html: &str) -> Result<Vec<WebResult>, SearchError> {
    let document = Html::parse_document(html);
    let heading_selector = Selector::parse("h2")
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
    let link_selector = Selector::parse("a")
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;

    let mut results = Vec::new();

    for heading in document.select(&heading_selector) {
        let Some(link) = heading.select(&link_selector).next() else {
            continue;
        };

        let title = link.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        if let Some(href) = link.value().attr("href").and_then(resolve_href) {
            results.push(WebResult { title, href });
        }
    }

    debug!("Parsed {} web results", results.len());
    Ok(results)
}

/// Turn a result link into an absolute URL.
fn resolve_href(href: &str) -> Option<String> {
    if let Some(rest) = href.strip_prefix("/url?") {
        // Google redirect: /url?q=<encoded_url>&sa=...
        return url::form_urlencoded::parse(rest.as_bytes())
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .filter(|target| target.starts_with("http://") || target.starts_with("https://"));
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        Some(href.to_string())
    } else if href.starts_with("//") {
        Some(format!("https:{}", href))
    } else {
        None
    }
}
