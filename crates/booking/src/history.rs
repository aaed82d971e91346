//! A user's rentals as shown on their bookings page: upcoming first, then
//! everything that has already ended.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sportslink_core::models::rental::RentalResponse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RentalHistory {
    /// Not yet ended, soonest start first
    pub active: Vec<RentalResponse>,
    /// Ended, most recent start first
    pub past: Vec<RentalResponse>,
}

impl RentalHistory {
    /// A rental is active while its end lies after `now`. Cancelled rentals are
    /// kept and split like any other; both sorts are stable.
    pub fn split<I>(rentals: I, now: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = RentalResponse>,
    {
        let (mut active, mut past): (Vec<_>, Vec<_>) = rentals
            .into_iter()
            .partition(|rental| rental.end_time > now);

        active.sort_by_key(|rental| rental.start_time);
        past.sort_by(|a, b| b.start_time.cmp(&a.start_time));

        Self { active, past }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.past.is_empty()
    }
}
