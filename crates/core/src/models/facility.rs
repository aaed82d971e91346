use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::FacilityId;
use crate::errors::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sport {
    Football,
    Padel,
    Tennis,
    Basketball,
    Volleyball,
    Swimming,
}

impl Sport {
    pub const ALL: [Sport; 6] = [
        Sport::Football,
        Sport::Padel,
        Sport::Tennis,
        Sport::Basketball,
        Sport::Volleyball,
        Sport::Swimming,
    ];

    /// The backend's query-string form, e.g. `?sport=FOOTBALL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "FOOTBALL",
            Sport::Padel => "PADEL",
            Sport::Tennis => "TENNIS",
            Sport::Basketball => "BASKETBALL",
            Sport::Volleyball => "VOLLEYBALL",
            Sport::Swimming => "SWIMMING",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Sport::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BookingError::InvalidInput(format!("Unknown sport: {}", s)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub city: String,
    pub address: String,
    /// "HH:MM" (or "HH:MM:SS" as some backend versions send it)
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub price_per_hour: f64,
    #[serde(default)]
    pub sports: Vec<Sport>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub status: Option<String>,
}

impl Facility {
    /// Opening and closing hour, only when both are declared and parseable.
    pub fn operating_hours(&self) -> Option<(u32, u32)> {
        let opening = parse_hour(self.opening_time.as_deref()?)?;
        let closing = parse_hour(self.closing_time.as_deref()?)?;
        Some((opening, closing))
    }

    /// Opening and closing time of day to the minute, only when both are
    /// declared and parseable.
    pub fn operating_times(&self) -> Option<(NaiveTime, NaiveTime)> {
        let opening = parse_time_of_day(self.opening_time.as_deref()?)?;
        let closing = parse_time_of_day(self.closing_time.as_deref()?)?;
        Some((opening, closing))
    }

    pub fn primary_sport(&self) -> Option<Sport> {
        self.sports.first().copied()
    }
}

/// Hour component of an "HH:MM[:SS]" string.
pub fn parse_hour(time: &str) -> Option<u32> {
    time.split(':')
        .next()?
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|hour| *hour <= 24)
}

/// "HH:MM" or "HH:MM:SS" as a time of day. "24:00" is the last second of the day.
pub fn parse_time_of_day(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    if matches!(time, "24:00" | "24:00:00") {
        return NaiveTime::from_hms_opt(23, 59, 59);
    }
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}
