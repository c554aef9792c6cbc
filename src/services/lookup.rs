//! One equipment lookup: front image and spec sheet, with per-request state.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use super::image_finder::ImageFinder;
use super::spec_sheet::SpecSheetFinder;
use crate::config::Settings;
use crate::http_client::{Fetch, FetchError, HttpClient};
use crate::models::{EquipmentQuery, LookupOutcome};

/// Runs both finders for a query.
///
/// Holds no per-request state; every call to [`EquipmentLookup::lookup`]
/// builds its own outcome, so concurrent requests cannot see each other.
pub struct EquipmentLookup {
    images: ImageFinder,
    spec_sheets: SpecSheetFinder,
}

impl EquipmentLookup {
    pub fn new(fetcher: Arc<dyn Fetch>, settings: &Settings) -> Self {
        Self {
            images: ImageFinder::new(fetcher.clone(), settings.max_images),
            spec_sheets: SpecSheetFinder::new(fetcher, settings.max_pages, settings.page_delay()),
        }
    }

    /// Build a lookup backed by a real HTTP client.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let client = HttpClient::builder(settings.request_timeout())
            .head_timeout(settings.head_timeout())
            .user_agent(&settings.user_agent)
            .build()?;
        Ok(Self::new(Arc::new(client), settings))
    }

    pub async fn lookup(&self, query: &EquipmentQuery) -> LookupOutcome {
        let start = Instant::now();
        info!(
            "Processing query: {} {} {} {}",
            query.manufacturer, query.model_no, query.equipment_type, query.voltage_rating
        );

        let (image, spec_sheet) =
            tokio::join!(self.images.find(query), self.spec_sheets.find(query));

        let mut unfetched = Vec::new();
        let front_image = match image {
            Ok(best) => Some(best.source_url),
            Err(miss) => {
                warn!("No front image for {}: {}", query.id_or_unknown(), miss);
                unfetched.push(query.id_or_unknown().to_string());
                None
            }
        };

        let elapsed = start.elapsed();
        info!("Time taken: {:.3}s", elapsed.as_secs_f64());

        LookupOutcome {
            front_image,
            spec_sheet,
            unfetched,
            elapsed,
        }
    }
}
