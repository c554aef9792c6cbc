//! Image candidates gathered for a single lookup.

/// A downloaded image considered for the "best front photo" decision.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Title the search engine showed for the image.
    pub label: String,
    /// Where the image was downloaded from.
    pub source_url: String,
    /// Undecoded image bytes.
    pub raw_bytes: Vec<u8>,
}

impl Candidate {
    pub fn new(label: impl Into<String>, source_url: impl Into<String>, raw_bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            source_url: source_url.into(),
            raw_bytes,
        }
    }
}

/// The winning candidate of a ranking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BestImage {
    pub label: String,
    pub source_url: String,
    pub score: f64,
}
