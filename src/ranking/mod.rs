//! Image-candidate ranking.
//!
//! - `keywords`: loose title matching used to filter search results
//! - `frontal`: edge-symmetry frontality score for one image
//! - `ranker`: decode + score a candidate set and keep the best

mod frontal;
mod keywords;
mod ranker;

pub use frontal::{
    aspect_score, compute_frontal_score, symmetry_diff, symmetry_score, CANNY_HIGH, CANNY_LOW,
    CANONICAL_SIZE,
};
pub use keywords::approximately_present;
pub use ranker::{select_best, CandidateRanker, EdgeSymmetryScorer, FrontalityScorer, Ranking};
