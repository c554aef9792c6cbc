//! HTTP request handlers for the web server.

mod api;
mod lookup;

// Re-export handlers for use by the router
pub use api::health;
pub use lookup::{get_front_image, FrontImageRequest, FrontImageResponse, NOT_FOUND};
