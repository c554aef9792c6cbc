//! Candidate ranking: decode, score, keep the best.

use std::io::Cursor;

use image::{DynamicImage, ImageReader};
use tracing::{debug, info, warn};

use super::frontal::compute_frontal_score;
use crate::models::{BestImage, Candidate};

/// Scores a decoded image; higher means more frontal.
pub trait FrontalityScorer {
    fn score(&self, image: &DynamicImage) -> f64;
}

/// The edge-symmetry + aspect-ratio heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeSymmetryScorer;

impl FrontalityScorer for EdgeSymmetryScorer {
    fn score(&self, image: &DynamicImage) -> f64 {
        compute_frontal_score(image)
    }
}

/// Picks the most frontal candidate out of a small, ordered set.
///
/// Each call works on its own running best; nothing is shared between calls.
#[derive(Debug, Clone, Default)]
pub struct CandidateRanker<S = EdgeSymmetryScorer> {
    scorer: S,
}

impl<S: FrontalityScorer> CandidateRanker<S> {
    /// Create a ranker with a custom scorer.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `candidates` in order and return the best one.
    ///
    /// Candidates that fail to decode are skipped. Ties keep the earlier
    /// candidate. Returns `None` when nothing could be decoded.
    pub fn select_best(&self, candidates: &[Candidate]) -> Option<BestImage> {
        self.rank(candidates).best
    }

    /// Decode and score every candidate once, keeping the per-candidate
    /// outcome alongside the winner.
    pub fn rank(&self, candidates: &[Candidate]) -> Ranking {
        let mut scores = Vec::with_capacity(candidates.len());
        let mut best: Option<BestImage> = None;

        for candidate in candidates {
            let image = match decode(&candidate.raw_bytes) {
                Ok(image) => image,
                Err(e) => {
                    warn!("Failed to process image {}: {}", candidate.source_url, e);
                    scores.push(Err(e));
                    continue;
                }
            };

            let score = self.scorer.score(&image);
            debug!("Frontal score for {}: {}", candidate.source_url, score);
            scores.push(Ok(score));

            let is_better = best.as_ref().map_or(true, |b| score > b.score);
            if is_better {
                best = Some(BestImage {
                    label: candidate.label.clone(),
                    source_url: candidate.source_url.clone(),
                    score,
                });
            }
        }

        if let Some(ref b) = best {
            info!("Best image {} (score {:.4})", b.source_url, b.score);
        }
        Ranking { scores, best }
    }
}

/// Outcome of [`CandidateRanker::rank`].
#[derive(Debug)]
pub struct Ranking {
    /// One entry per candidate, in input order; `Err` when decoding failed.
    pub scores: Vec<image::ImageResult<f64>>,
    pub best: Option<BestImage>,
}

/// Rank `candidates` with the default scorer and return the winning URL.
pub fn select_best(candidates: &[Candidate]) -> Option<String> {
    CandidateRanker::<EdgeSymmetryScorer>::default()
        .select_best(candidates)
        .map(|b| b.source_url)
}

/// Detect the format and fully decode, which doubles as the integrity check.
fn decode(bytes: &[u8]) -> image::ImageResult<DynamicImage> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
}
