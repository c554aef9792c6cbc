//! `POST /get-front-image`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::super::AppState;
use crate::models::{EquipmentQuery, LookupOutcome};

/// Rendered in place of a URL that could not be found.
pub const NOT_FOUND: &str = "Not found";

/// Request body. `manufacturer` and `voltageRating` may be omitted or null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontImageRequest {
    pub equipment_type: String,
    pub model_no: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub voltage_rating: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl From<FrontImageRequest> for EquipmentQuery {
    fn from(req: FrontImageRequest) -> Self {
        EquipmentQuery {
            id: req.id,
            manufacturer: req.manufacturer.unwrap_or_default(),
            model_no: req.model_no,
            equipment_type: req.equipment_type,
            voltage_rating: req.voltage_rating.unwrap_or_default(),
        }
    }
}

/// Response body.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrontImageResponse {
    pub equipment_type: String,
    pub model_no: String,
    pub spec_sheet_url: String,
    pub front_image_url: String,
    #[serde(rename = "time taken")]
    pub time_taken: f64,
}

impl FrontImageResponse {
    /// Render an outcome, mapping absence to [`NOT_FOUND`].
    pub fn from_outcome(query: &EquipmentQuery, outcome: LookupOutcome) -> Self {
        Self {
            equipment_type: query.equipment_type.clone(),
            model_no: query.model_no.clone(),
            spec_sheet_url: outcome.spec_sheet.unwrap_or_else(|| NOT_FOUND.to_string()),
            front_image_url: outcome.front_image.unwrap_or_else(|| NOT_FOUND.to_string()),
            time_taken: outcome.elapsed.as_secs_f64(),
        }
    }
}

pub async fn get_front_image(
    State(state): State<AppState>,
    Json(request): Json<FrontImageRequest>,
) -> Json<FrontImageResponse> {
    let query = EquipmentQuery::from(request);
    let outcome = state.lookup.lookup(&query).await;

    if !outcome.unfetched.is_empty() {
        tracing::info!("Unfetched ids: {:?}", outcome.unfetched);
    }

    Json(FrontImageResponse::from_outcome(&query, outcome))
}
