//! Search engine result pages.
//!
//! Builds result page URLs and parses hits out of the returned HTML.
//! Fetching is left to the caller.

mod bing_images;
mod query;
mod web_results;

pub use bing_images::{image_search_url, parse_image_results, ImageResult};
pub use query::{image_query, spec_sheet_query, QueryBuilder};
pub use web_results::{parse_web_results, web_search_urls, WebResult};
