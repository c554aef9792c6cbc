//! Bing image search.
//!
//! Each image tile on the results page is an `<a class="iusc">` whose `m`
//! attribute holds a JSON blob with the title (`t`) and the full-size image
//! URL (`murl`).

use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::discovery::SearchError;

/// Bing image search URL.
const BING_IMAGES_URL: &str = "https://www.bing.com/images/search";

/// An image hit on the results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub title: String,
    pub image_url: String,
}

/// Metadata blob in the `m` attribute.
#[derive(Debug, Deserialize)]
struct TileMetadata {
    #[serde(default)]
    t: String,
    #[serde(default)]
    murl: Option<String>,
}

/// Results page URL for `query`.
pub fn image_search_url(query: &str) -> Result<String, SearchError> {
    url::Url::parse_with_params(BING_IMAGES_URL, &[("q", query), ("form", "HDRSC2")])
        .map(String::from)
        .map_err(|e| SearchError::Url(e.to_string()))
}

/// Parse image hits from a Bing image results page, in page order.
///
/// Tiles with unparseable metadata, an empty title or no image URL are
/// skipped.
pub fn parse_image_results(html: &str) -> Result<Vec<ImageResult>, SearchError> {
    let document = Html::parse_document(html);
    let tile_selector = Selector::parse("a.iusc")
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;

    let mut results = Vec::new();

    for tile in document.select(&tile_selector) {
        let Some(m_attr) = tile.value().attr("m") else {
            continue;
        };

        let meta: TileMetadata = match serde_json::from_str(m_attr) {
            Ok(meta) => meta,
            Err(e) => {
                warn!("Failed to parse JSON from 'm' attribute: {}", e);
                continue;
            }
        };

        match meta.murl {
            Some(image_url) if !meta.t.is_empty() && !image_url.is_empty() => {
                results.push(ImageResult {
                    title: meta.t,
                    image_url,
                });
            }
            _ => continue,
        }
    }

    debug!("Parsed {} image results from Bing", results.len());
    Ok(results)
}
