//! # Slot Availability
//!
//! Deciding whether a given hour at a facility is already taken lives behind
//! [`AvailabilityRule`], so the calendar never needs to know where that answer
//! comes from.
//!
//! Two rules are provided:
//!
//! - [`PlaceholderAvailability`]: a fixed arithmetic pattern that marks roughly
//!   one hour in ten as booked. It stands in for live data and keeps slot grids
//!   reproducible across client versions.
//! - [`ExistingRentals`]: real availability computed from rentals the caller
//!   has already fetched for the facility.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use sportslink_core::models::{FacilityId, rental::RentalResponse};
use tracing::trace;

/// Answers "is this hour already booked?"
#[cfg_attr(test, mockall::automock)]
pub trait AvailabilityRule {
    /// `hour` is the slot's start hour on `date`, covering `[hour, hour + 1)`.
    fn is_booked(&self, facility_id: FacilityId, date: NaiveDate, hour: u32) -> bool;
}

impl<T: AvailabilityRule + ?Sized> AvailabilityRule for &T {
    fn is_booked(&self, facility_id: FacilityId, date: NaiveDate, hour: u32) -> bool {
        (**self).is_booked(facility_id, date, hour)
    }
}

impl<T: AvailabilityRule + ?Sized> AvailabilityRule for Box<T> {
    fn is_booked(&self, facility_id: FacilityId, date: NaiveDate, hour: u32) -> bool {
        (**self).is_booked(facility_id, date, hour)
    }
}

/// Booked iff `(day_of_month + month0 + hour) % 10 == 0`, with `month0`
/// counting January as 0.
///
/// Not a business rule. Replace with [`ExistingRentals`] (or another rule)
/// once live rental data is available to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAvailability;

impl AvailabilityRule for PlaceholderAvailability {
    fn is_booked(&self, _facility_id: FacilityId, date: NaiveDate, hour: u32) -> bool {
        (date.day() + date.month0() + hour) % 10 == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BookedInterval {
    facility_id: FacilityId,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Availability derived from a snapshot of existing rentals.
///
/// Cancelled rentals never block a slot. An hour is booked when any other
/// rental of the same facility overlaps it, using half-open intervals, so a
/// rental ending at 18:00 leaves the 18:00 slot free.
#[derive(Debug, Clone, Default)]
pub struct ExistingRentals {
    booked: Vec<BookedInterval>,
}

impl ExistingRentals {
    pub fn new<'a, I>(rentals: I) -> Self
    where
        I: IntoIterator<Item = &'a RentalResponse>,
    {
        let booked = rentals
            .into_iter()
            .filter(|rental| rental.is_active())
            .map(|rental| BookedInterval {
                facility_id: rental.facility_id,
                start: rental.start_time,
                end: rental.end_time,
            })
            .collect();

        Self { booked }
    }

    pub fn len(&self) -> usize {
        self.booked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booked.is_empty()
    }
}

impl AvailabilityRule for ExistingRentals {
    fn is_booked(&self, facility_id: FacilityId, date: NaiveDate, hour: u32) -> bool {
        let slot_start = date.and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(hour));
        let slot_end = slot_start + TimeDelta::hours(1);

        let booked = self.booked.iter().any(|interval| {
            interval.facility_id == facility_id
                && interval.start < slot_end
                && interval.end > slot_start
        });

        if booked {
            trace!(facility_id, %date, hour, "slot overlaps an existing rental");
        }
        booked
    }
}
