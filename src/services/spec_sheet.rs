//! Spec-sheet discovery: web search for PDFs, verified with a HEAD request.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::discovery::search::{parse_web_results, spec_sheet_query, web_search_urls, WebResult};
use crate::http_client::Fetch;
use crate::models::EquipmentQuery;
use crate::ranking::approximately_present;

/// Finds a PDF specification sheet for a query.
pub struct SpecSheetFinder {
    fetcher: Arc<dyn Fetch>,
    max_pages: usize,
    page_delay: Duration,
}

impl SpecSheetFinder {
    pub fn new(fetcher: Arc<dyn Fetch>, max_pages: usize, page_delay: Duration) -> Self {
        Self {
            fetcher,
            max_pages,
            page_delay,
        }
    }

    /// Walk Bing then Google result pages and return the first verified PDF.
    ///
    /// A page that fails to load is skipped without waiting; after a loaded
    /// page turns up nothing, the finder waits `page_delay` before the next.
    pub async fn find(&self, query: &EquipmentQuery) -> Option<String> {
        let search_query = spec_sheet_query(query);
        let urls = match web_search_urls(&search_query, self.max_pages) {
            Ok(urls) => urls,
            Err(e) => {
                warn!("Cannot build spec sheet search for '{}': {}", search_query, e);
                return None;
            }
        };
        let keywords = query.spec_sheet_keywords();

        let page_count = urls.len();
        for (index, url) in urls.into_iter().enumerate() {
            info!("Searching: {}", url);

            let html = match self.fetcher.get_text(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Failed to fetch search page for {}: {}", url, e);
                    continue;
                }
            };

            match parse_web_results(&html) {
                Ok(results) => {
                    if let Some(href) = self.first_pdf(results, &keywords).await {
                        return Some(href);
                    }
                }
                Err(e) => warn!("Failed to parse results from {}: {}", url, e),
            }

            if index + 1 < page_count && !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
        }

        info!("No valid PDF specification sheet found for '{}'", search_query);
        None
    }

    async fn first_pdf(&self, results: Vec<WebResult>, keywords: &[&str]) -> Option<String> {
        for result in results {
            if !is_pdf_link(&result.href) || !approximately_present(&result.title, keywords) {
                continue;
            }

            match self.fetcher.head(&result.href).await {
                Ok(head) if head.is_pdf() => {
                    info!("PDF match: {} ({})", result.title, result.href);
                    return Some(result.href);
                }
                Ok(head) => debug!(
                    "Not a PDF: {} ({}, {:?})",
                    result.href,
                    head.status,
                    head.content_type()
                ),
                Err(e) => debug!("HEAD failed for {}: {}", result.href, e),
            }
        }
        None
    }
}

fn is_pdf_link(href: &str) -> bool {
    href.to_lowercase().contains(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_link_check_is_case_insensitive() {
        assert!(is_pdf_link("https://abb.example/Terra54.PDF"));
        assert!(is_pdf_link("https://abb.example/doc.pdf?download=1"));
        assert!(!is_pdf_link("https://abb.example/terra54.html"));
    }
}
