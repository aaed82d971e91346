use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::FacilityId;

/// One bookable hour, `[start_hour, start_hour + 1)`, on a given day.
///
/// Derived per date query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub facility_id: FacilityId,
    pub date: NaiveDate,
    pub start_hour: u32,
    pub available: bool,
}

impl TimeSlot {
    pub fn end_hour(&self) -> u32 {
        self.start_hour + 1
    }

    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.start_hour % 24, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// "HH:00", the label shown on the slot button
    pub fn label(&self) -> String {
        format!("{:02}:00", self.start_hour)
    }
}
