//! Equipment descriptor used as the input of a lookup.

use serde::{Deserialize, Serialize};

/// Identifier recorded for queries that arrive without an `id`.
pub const UNKNOWN_QUERY_ID: &str = "unknown";

/// A piece of equipment to find a photo and spec sheet for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentQuery {
    /// Caller-supplied identifier, used only for unfetched bookkeeping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub manufacturer: String,
    pub model_no: String,
    pub equipment_type: String,
    #[serde(default)]
    pub voltage_rating: String,
}

impl EquipmentQuery {
    pub fn new(
        manufacturer: impl Into<String>,
        model_no: impl Into<String>,
        equipment_type: impl Into<String>,
        voltage_rating: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            manufacturer: manufacturer.into(),
            model_no: model_no.into(),
            equipment_type: equipment_type.into(),
            voltage_rating: voltage_rating.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The id to record when this query could not be satisfied.
    pub fn id_or_unknown(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_QUERY_ID)
    }

    /// Keywords an image title must loosely match.
    pub fn image_keywords(&self) -> [&str; 3] {
        [&self.manufacturer, &self.model_no, &self.equipment_type]
    }

    /// Keywords a spec-sheet result title must loosely match.
    pub fn spec_sheet_keywords(&self) -> [&str; 2] {
        [&self.manufacturer, &self.model_no]
    }

    /// The voltage search term, e.g. `480V`, or `None` when no rating is set.
    pub fn voltage_term(&self) -> Option<String> {
        let rating = self.voltage_rating.trim();
        if rating.is_empty() {
            None
        } else {
            Some(format!("{}V", rating))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let query: EquipmentQuery =
            serde_json::from_str(r#"{"equipmentType": "EV Charger", "modelNo": "Terra 54"}"#)
                .unwrap();
        assert_eq!(query.equipment_type, "EV Charger");
        assert_eq!(query.model_no, "Terra 54");
        assert_eq!(query.manufacturer, "");
        assert_eq!(query.voltage_rating, "");
        assert_eq!(query.id, None);
    }

    #[test]
    fn missing_id_records_unknown() {
        let query = EquipmentQuery::new("ABB", "Terra 54", "EV Charger", "480");
        assert_eq!(query.id_or_unknown(), "unknown");
        assert_eq!(query.with_id("eq-7").id_or_unknown(), "eq-7");
    }

    #[test]
    fn keyword_sets_follow_field_order() {
        let query = EquipmentQuery::new("ABB", "Terra 54", "EV Charger", "480");
        assert_eq!(query.image_keywords(), ["ABB", "Terra 54", "EV Charger"]);
        assert_eq!(query.spec_sheet_keywords(), ["ABB", "Terra 54"]);
    }

    #[test]
    fn voltage_term_is_optional() {
        let query = EquipmentQuery::new("ABB", "Terra 54", "EV Charger", "480");
        assert_eq!(query.voltage_term().as_deref(), Some("480V"));

        let query = EquipmentQuery::new("ABB", "Terra 54", "EV Charger", " ");
        assert_eq!(query.voltage_term(), None);
    }
}
