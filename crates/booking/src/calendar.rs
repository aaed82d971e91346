//! # Booking Calendar
//!
//! Month grids for date selection and hourly slot grids for a chosen day.
//!
//! The month grid starts on Monday: column 0 is Monday and column 6 is Sunday,
//! whatever weekday the 1st falls on. Days before `today` are not selectable;
//! comparisons are by date only.
//!
//! Slots cover every whole hour in `[opening, closing)`. Which of them are
//! already booked is decided by an [`AvailabilityRule`]. An empty slot list is
//! a normal outcome (facility closed, inverted hours) and never an error.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sportslink_core::{
    errors::{BookingError, BookingResult},
    models::{FacilityId, facility::Facility, time_slot::TimeSlot},
};
use tracing::{debug, warn};

use crate::{
    availability::{AvailabilityRule, PlaceholderAvailability},
    config::BookingConfig,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    /// 0 = Monday … 6 = Sunday
    pub weekday_column: u32,
    pub is_past: bool,
    pub is_today: bool,
}

impl CalendarDay {
    pub fn is_selectable(&self) -> bool {
        !self.is_past
    }
}

fn first_of_month(year: i32, month: u32) -> BookingResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| BookingError::invalid_input(format!("Invalid month {}-{}", year, month)))
}

pub fn days_in_month(year: i32, month: u32) -> BookingResult<u32> {
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = shift_month(year, month, 1)?;
    let next_first = first_of_month(next_year, next_month)?;

    Ok(next_first.signed_duration_since(first).num_days() as u32)
}

/// Empty cells before the 1st in a Monday-first grid.
pub fn leading_blank_cells(year: i32, month: u32) -> BookingResult<u32> {
    Ok(first_of_month(year, month)?.weekday().num_days_from_monday())
}

/// Month navigation: `delta` months forward (negative goes back).
pub fn shift_month(year: i32, month: u32, delta: i32) -> BookingResult<(i32, u32)> {
    if !(1..=12).contains(&month) {
        return Err(BookingError::invalid_input(format!("Invalid month {}", month)));
    }

    let index = i64::from(year) * 12 + i64::from(month - 1) + i64::from(delta);
    let year = i32::try_from(index.div_euclid(12))
        .map_err(|_| BookingError::invalid_input("Year out of range"))?;
    let month = index.rem_euclid(12) as u32 + 1;

    Ok((year, month))
}

/// Every day of `month`, flagged against `today`.
///
/// # Errors
///
/// `InvalidInput` when `month` is outside 1..=12 or the year cannot be
/// represented.
pub fn list_selectable_days(
    year: i32,
    month: u32,
    today: NaiveDate,
) -> BookingResult<Vec<CalendarDay>> {
    let first = first_of_month(year, month)?;
    let count = days_in_month(year, month)?;

    let days = first
        .iter_days()
        .take(count as usize)
        .map(|date| CalendarDay {
            date,
            day: date.day(),
            weekday_column: date.weekday().num_days_from_monday(),
            is_past: date < today,
            is_today: date == today,
        })
        .collect();

    Ok(days)
}

/// One slot per hour in `[opening_hour, closing_hour)`.
///
/// `closing_hour` is clamped to 24. Inverted or empty windows give no slots.
pub fn compute_slots<R>(
    date: NaiveDate,
    opening_hour: u32,
    closing_hour: u32,
    facility_id: FacilityId,
    rule: &R,
) -> Vec<TimeSlot>
where
    R: AvailabilityRule + ?Sized,
{
    let closing_hour = closing_hour.min(24);
    if closing_hour <= opening_hour {
        debug!(facility_id, opening_hour, closing_hour, "no slots for empty operating window");
        return Vec::new();
    }

    (opening_hour..closing_hour)
        .map(|hour| TimeSlot {
            facility_id,
            date,
            start_hour: hour,
            available: !rule.is_booked(facility_id, date, hour),
        })
        .collect()
}

pub fn has_available(slots: &[TimeSlot]) -> bool {
    slots.iter().any(|slot| slot.available)
}

pub fn first_available(slots: &[TimeSlot]) -> Option<&TimeSlot> {
    slots.iter().find(|slot| slot.available)
}

/// Slot enumeration bound to an availability rule and default hours.
#[derive(Debug, Clone)]
pub struct SlotCalendar<R = PlaceholderAvailability> {
    rule: R,
    default_opening_hour: u32,
    default_closing_hour: u32,
}

impl SlotCalendar<PlaceholderAvailability> {
    pub fn placeholder() -> Self {
        Self::new(PlaceholderAvailability, &BookingConfig::default())
    }
}

impl<R: AvailabilityRule> SlotCalendar<R> {
    pub fn new(rule: R, config: &BookingConfig) -> Self {
        Self {
            rule,
            default_opening_hour: config.default_opening_hour,
            default_closing_hour: config.default_closing_hour,
        }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The facility's hours, or the configured defaults when it declares none.
    pub fn operating_hours(&self, facility: &Facility) -> (u32, u32) {
        match facility.operating_hours() {
            Some(hours) => hours,
            None => {
                if facility.opening_time.is_some() || facility.closing_time.is_some() {
                    warn!(
                        facility_id = facility.id,
                        opening = ?facility.opening_time,
                        closing = ?facility.closing_time,
                        "unusable operating hours, falling back to defaults"
                    );
                }
                (self.default_opening_hour, self.default_closing_hour)
            }
        }
    }

    pub fn slots_for(&self, facility: &Facility, date: NaiveDate) -> Vec<TimeSlot> {
        let (opening, closing) = self.operating_hours(facility);
        compute_slots(date, opening, closing, facility.id, &self.rule)
    }

    pub fn month(&self, year: i32, month: u32, today: NaiveDate) -> BookingResult<Vec<CalendarDay>> {
        list_selectable_days(year, month, today)
    }
}
