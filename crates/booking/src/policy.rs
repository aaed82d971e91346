//! # Rental Policy
//!
//! The rental backend refuses requests that break a handful of timing rules.
//! [`RentalPolicy`] applies the same rules before submission so the caller can
//! report problems without a round trip. The backend stays authoritative.

use chrono::{NaiveDateTime, TimeDelta};
use sportslink_core::{
    errors::{BookingError, BookingResult},
    models::{
        RentalId,
        facility::Facility,
        rental::{RentalRequest, RentalResponse, RentalStatus},
    },
};
use tracing::debug;

use crate::config::BookingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPolicy {
    pub min_duration: TimeDelta,
    pub max_duration: TimeDelta,
    pub min_lead: TimeDelta,
    pub max_advance: TimeDelta,
    pub min_update_lead: TimeDelta,
}

impl Default for RentalPolicy {
    fn default() -> Self {
        Self::new(&BookingConfig::default())
    }
}

fn violation(message: impl Into<String>) -> BookingError {
    let message = message.into();
    debug!(%message, "rental request rejected before submission");
    BookingError::PolicyViolation(message)
}

impl RentalPolicy {
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            min_duration: TimeDelta::hours(i64::from(config.min_rental_hours)),
            max_duration: TimeDelta::hours(i64::from(config.max_rental_hours)),
            min_lead: TimeDelta::hours(i64::from(config.min_lead_hours)),
            max_advance: TimeDelta::days(i64::from(config.max_advance_days)),
            min_update_lead: TimeDelta::hours(i64::from(config.min_update_lead_hours)),
        }
    }

    /// Timing rules for a new rental at `facility`, evaluated at `now`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the request targets a different facility, otherwise
    /// `PolicyViolation` naming the first rule broken.
    pub fn check(
        &self,
        request: &RentalRequest,
        facility: &Facility,
        now: NaiveDateTime,
    ) -> BookingResult<()> {
        ensure_same_facility(request, facility)?;

        let start = request.start_time;
        let end = request.end_time;

        if start < now {
            return Err(violation("Cannot create rental in the past"));
        }
        ensure_ends_after_start(request)?;
        if start + self.min_duration > end {
            return Err(violation(format!(
                "Rental duration must be at least {} hour(s)",
                self.min_duration.num_hours()
            )));
        }
        if start + self.max_duration < end {
            return Err(violation(format!(
                "Rental duration cannot exceed {} hours",
                self.max_duration.num_hours()
            )));
        }
        if start < now + self.min_lead {
            return Err(violation(format!(
                "Rental must be booked at least {} hour(s) in advance",
                self.min_lead.num_hours()
            )));
        }
        if start > now + self.max_advance {
            return Err(violation(format!(
                "Rental cannot be booked more than {} days in advance",
                self.max_advance.num_days()
            )));
        }

        check_operating_hours(request, facility)
    }

    /// Rejects a request overlapping any active rental of the same facility.
    /// `editing` excludes the rental being modified from the comparison.
    pub fn check_conflicts(
        &self,
        request: &RentalRequest,
        existing: &[RentalResponse],
        editing: Option<RentalId>,
    ) -> BookingResult<()> {
        if overlaps_active_rental(request, existing, editing) {
            return Err(violation("Facility already booked for this time slot"));
        }
        Ok(())
    }

    /// Rules for rescheduling rental `rental_id` to `request`.
    ///
    /// Rescheduling needs more notice than booking (`min_update_lead`) but has
    /// no duration or advance limits. The rental itself never conflicts with
    /// its new time.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the request targets a different facility, otherwise
    /// `PolicyViolation` naming the first rule broken.
    pub fn check_update(
        &self,
        rental_id: RentalId,
        request: &RentalRequest,
        facility: &Facility,
        existing: &[RentalResponse],
        now: NaiveDateTime,
    ) -> BookingResult<()> {
        ensure_same_facility(request, facility)?;

        if request.start_time < now {
            return Err(violation("Cannot update rental to past time"));
        }
        if request.start_time < now + self.min_update_lead {
            return Err(violation(format!(
                "Updates must be made for a time at least {} hours in the future",
                self.min_update_lead.num_hours()
            )));
        }
        ensure_ends_after_start(request)?;
        check_operating_hours(request, facility)?;

        if overlaps_active_rental(request, existing, Some(rental_id)) {
            return Err(violation("New time slot conflicts with existing booking"));
        }
        Ok(())
    }

    /// A rental can be cancelled once, and only before it starts.
    pub fn check_cancel(&self, rental: &RentalResponse, now: NaiveDateTime) -> BookingResult<()> {
        if rental.status == RentalStatus::Cancelled {
            return Err(violation("Rental is already cancelled"));
        }
        if rental.start_time < now {
            return Err(violation("Cannot cancel rental that has already passed"));
        }
        Ok(())
    }
}

fn ensure_same_facility(request: &RentalRequest, facility: &Facility) -> BookingResult<()> {
    if request.facility_id != facility.id {
        return Err(BookingError::invalid_input(format!(
            "Rental targets facility {} but facility {} was given",
            request.facility_id, facility.id
        )));
    }
    Ok(())
}

fn ensure_ends_after_start(request: &RentalRequest) -> BookingResult<()> {
    if request.end_time <= request.start_time {
        return Err(violation("End time must be after start time"));
    }
    Ok(())
}

fn overlaps_active_rental(
    request: &RentalRequest,
    existing: &[RentalResponse],
    editing: Option<RentalId>,
) -> bool {
    existing.iter().any(|rental| {
        rental.is_active()
            && Some(rental.id) != editing
            && rental.facility_id == request.facility_id
            && rental.start_time < request.end_time
            && rental.end_time > request.start_time
    })
}

/// Compares times of day only, to the minute, like the backend does.
fn check_operating_hours(request: &RentalRequest, facility: &Facility) -> BookingResult<()> {
    let Some((opening, closing)) = facility.operating_times() else {
        return Ok(());
    };

    if request.start_time.time() < opening || request.end_time.time() > closing {
        return Err(violation("Rental time is outside facility operating hours"));
    }
    Ok(())
}
