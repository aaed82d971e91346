use serde::{Deserialize, Serialize};

use super::{EquipmentId, FacilityId, facility::Sport};

/// A scored equipment recommendation produced by the recommendation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSuggestion {
    pub equipment_id: EquipmentId,
    /// Confidence, usually 0-100 but not capped
    pub score: f64,
    #[serde(default)]
    pub reason: String,
    /// Sport the suggestion was requested for; the backend omits it
    #[serde(default)]
    pub sport: Option<Sport>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub price_per_hour: Option<f64>,
    pub quantity: Option<u32>,
}

impl EquipmentSuggestion {
    pub fn new(equipment_id: EquipmentId, score: f64, reason: impl Into<String>) -> Self {
        Self {
            equipment_id,
            score,
            reason: reason.into(),
            sport: None,
            name: None,
            equipment_type: None,
            price_per_hour: None,
            quantity: None,
        }
    }

    pub fn for_sport(mut self, sport: Sport) -> Self {
        self.sport = Some(sport);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySuggestion {
    pub facility_id: FacilityId,
    pub name: String,
    pub city: String,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub price_per_hour: f64,
    pub rating: Option<f64>,
    pub reason: String,
    pub score: f64,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

/// Advice shown to facility owners on their suggestions page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSuggestion {
    /// e.g. ADD_EQUIPMENT, MAINTENANCE, LOWER_PRICE
    #[serde(rename = "type")]
    pub suggestion_type: String,
    pub facility_id: FacilityId,
    pub facility_name: String,
    pub title: String,
    pub description: String,
    pub priority: SuggestionPriority,
    pub potential_revenue: Option<f64>,
}
