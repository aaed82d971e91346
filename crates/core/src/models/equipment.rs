use std::fmt;

use serde::{Deserialize, Serialize};

use super::EquipmentId;

/// Kind of rentable equipment.
///
/// Owners may register types the client does not know about yet, so any
/// unrecognised backend string is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquipmentType {
    Ball,
    Racket,
    Net,
    Vest,
    Other(String),
}

impl EquipmentType {
    pub fn as_str(&self) -> &str {
        match self {
            EquipmentType::Ball => "BALL",
            EquipmentType::Racket => "RACKET",
            EquipmentType::Net => "NET",
            EquipmentType::Vest => "VEST",
            EquipmentType::Other(other) => other,
        }
    }
}

impl From<String> for EquipmentType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "BALL" => EquipmentType::Ball,
            "RACKET" => EquipmentType::Racket,
            "NET" => EquipmentType::Net,
            "VEST" => EquipmentType::Vest,
            _ => EquipmentType::Other(value),
        }
    }
}

impl From<EquipmentType> for String {
    fn from(value: EquipmentType) -> Self {
        match value {
            EquipmentType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    Available,
    Maintenance,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    pub id: EquipmentId,
    pub name: String,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub description: Option<String>,
    pub quantity: u32,
    pub price_per_hour: f64,
    pub status: EquipmentStatus,
}

impl EquipmentItem {
    pub fn is_available(&self) -> bool {
        self.status == EquipmentStatus::Available
    }
}
