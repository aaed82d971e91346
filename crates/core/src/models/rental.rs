use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{EquipmentId, FacilityId, RentalId, UserId};

/// Version of the rental endpoint contract these types target.
pub const RENTAL_API_VERSION: &str = "v1";

/// Body of `POST /rentals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub user_id: UserId,
    pub facility_id: FacilityId,
    #[serde(with = "naive_local")]
    pub start_time: NaiveDateTime,
    #[serde(with = "naive_local")]
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub equipment_ids: Vec<EquipmentId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Confirmed,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: RentalId,
    pub facility_id: FacilityId,
    #[serde(with = "naive_local")]
    pub start_time: NaiveDateTime,
    #[serde(with = "naive_local")]
    pub end_time: NaiveDateTime,
    pub status: RentalStatus,
    /// Equipment names; the backend does not echo ids
    #[serde(default)]
    pub equipments: Vec<String>,
}

impl RentalResponse {
    pub fn is_active(&self) -> bool {
        self.status != RentalStatus::Cancelled
    }
}

/// Naive local timestamps as the backend expects them:
/// `YYYY-MM-DDTHH:MM:SS`, never with an offset or a `Z` suffix.
pub mod naive_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn format(value: &NaiveDateTime) -> String {
        value.format(FORMAT).to_string()
    }

    /// Accepts the canonical form plus the variants Java emits
    /// (fractional seconds, or seconds omitted when zero).
    pub fn parse(value: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
            .ok()
    }

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid local date-time: {}", raw)))
    }
}
