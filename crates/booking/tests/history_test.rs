mod test_utils;

use pretty_assertions::assert_eq;
use sportslink_booking::history::RentalHistory;
use sportslink_core::models::rental::{RentalResponse, RentalStatus};

use test_utils::{datetime, rental};

fn ids(rentals: &[RentalResponse]) -> Vec<i64> {
    rentals.iter().map(|rental| rental.id).collect()
}

#[test]
fn test_split_orders_active_soonest_and_past_newest() {
    let mut cancelled = rental(5, 1, "2025-11-25T10:00:00", "2025-11-25T11:00:00", &[]);
    cancelled.status = RentalStatus::Cancelled;

    let history = RentalHistory::split(
        vec![
            rental(1, 1, "2025-11-10T10:00:00", "2025-11-10T11:00:00", &[]),
            rental(2, 1, "2025-11-30T18:00:00", "2025-11-30T19:00:00", &[]),
            rental(3, 1, "2025-11-18T09:00:00", "2025-11-18T10:00:00", &[]),
            // started before now but still running
            rental(4, 1, "2025-11-20T07:00:00", "2025-11-20T09:00:00", &[]),
            cancelled,
        ],
        datetime("2025-11-20T08:00:00"),
    );

    assert_eq!(ids(&history.active), vec![4, 5, 2]);
    assert_eq!(ids(&history.past), vec![3, 1]);
}

#[test]
fn test_rental_ending_now_is_past() {
    let history = RentalHistory::split(
        vec![rental(1, 1, "2025-11-20T07:00:00", "2025-11-20T08:00:00", &[])],
        datetime("2025-11-20T08:00:00"),
    );

    assert!(history.active.is_empty());
    assert_eq!(ids(&history.past), vec![1]);
}

#[test]
fn test_split_of_nothing_is_empty() {
    let history = RentalHistory::split(Vec::new(), datetime("2025-11-20T08:00:00"));

    assert!(history.is_empty());
}
