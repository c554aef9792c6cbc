//! Data models for equipscout.

mod candidate;
mod lookup;
mod query;

pub use candidate::{BestImage, Candidate};
pub use lookup::LookupOutcome;
pub use query::{EquipmentQuery, UNKNOWN_QUERY_ID};
