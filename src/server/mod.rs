//! Web server exposing the equipment lookup.
//!
//! - `POST /get-front-image`: front photo + spec sheet for one equipment descriptor
//! - `GET /health`: liveness probe

mod handlers;
mod routes;

pub use handlers::{FrontImageRequest, FrontImageResponse, NOT_FOUND};
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::EquipmentLookup;

/// Shared state for the web server.
///
/// Only immutable services live here; per-request results never do.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<EquipmentLookup>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self::with_lookup(EquipmentLookup::from_settings(settings)?))
    }

    pub fn with_lookup(lookup: EquipmentLookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
