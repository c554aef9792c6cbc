//! Front-image discovery: Bing image search, keyword filter, download, rank.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::discovery::search::{image_query, image_search_url, parse_image_results, ImageResult};
use crate::discovery::SearchError;
use crate::http_client::{Fetch, FetchError};
use crate::models::{BestImage, Candidate, EquipmentQuery};
use crate::ranking::{approximately_present, CandidateRanker, EdgeSymmetryScorer};

/// Why an image lookup produced no result.
#[derive(Debug, thiserror::Error)]
pub enum ImageMiss {
    #[error("failed to fetch image search page: {0}")]
    SearchFailed(#[from] FetchError),

    #[error("{0}")]
    Search(#[from] SearchError),

    #[error("no matching images found")]
    NoCandidates,

    #[error("no valid images processed")]
    NoDecodableImages,

    #[error("ranking task failed: {0}")]
    Ranking(String),
}

/// Finds the most frontal product photo for a query.
pub struct ImageFinder {
    fetcher: Arc<dyn Fetch>,
    max_images: usize,
}

impl ImageFinder {
    pub fn new(fetcher: Arc<dyn Fetch>, max_images: usize) -> Self {
        Self {
            fetcher,
            max_images,
        }
    }

    /// Search, download up to `max_images` matching candidates and rank them.
    pub async fn find(&self, query: &EquipmentQuery) -> Result<BestImage, ImageMiss> {
        let search_query = image_query(query);
        let keywords = query.image_keywords();
        debug!("Keywords for approximate filtering: {:?}", keywords);

        let url = image_search_url(&search_query)?;
        info!("Image search: {}", url);

        let html = self.fetcher.get_text(&url).await?;
        let results = parse_image_results(&html)?;

        let candidates = self.collect_candidates(results, &keywords).await;
        if candidates.is_empty() {
            return Err(ImageMiss::NoCandidates);
        }

        // decode + edge detection is CPU work
        let best = tokio::task::spawn_blocking(move || {
            CandidateRanker::<EdgeSymmetryScorer>::default().select_best(&candidates)
        })
        .await
        .map_err(|e| ImageMiss::Ranking(e.to_string()))?;

        best.ok_or(ImageMiss::NoDecodableImages)
    }

    /// Download matching results in page order until `max_images` are held.
    ///
    /// Results whose title does not match the keywords, or whose download
    /// fails, are skipped.
    pub async fn collect_candidates(
        &self,
        results: Vec<ImageResult>,
        keywords: &[&str],
    ) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for result in results {
            if candidates.len() >= self.max_images {
                break;
            }
            if !approximately_present(&result.title, keywords) {
                continue;
            }

            debug!("Found matching image with title: {}", result.title);
            match self.fetcher.get_bytes(&result.image_url).await {
                Ok(bytes) => {
                    candidates.push(Candidate::new(result.title, result.image_url, bytes));
                }
                Err(e) => warn!("Failed to download image {}: {}", result.image_url, e),
            }
        }

        candidates
    }
}
