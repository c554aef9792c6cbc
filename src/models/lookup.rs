//! Result of a single equipment lookup.

use std::time::Duration;

/// What one lookup found. Absence is `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupOutcome {
    pub front_image: Option<String>,
    pub spec_sheet: Option<String>,
    /// Query ids for which no front image could be produced in this request.
    pub unfetched: Vec<String>,
    pub elapsed: Duration,
}
