//! # SportsLink Booking Engine
//!
//! Pure booking computations for the SportsLink rental client. Every function in
//! this crate works on data the caller has already fetched from the rental
//! backend; nothing here performs I/O.
//!
//! ## Components
//!
//! - **Calendar**: selectable days of a month and hourly slots within a
//!   facility's operating hours
//! - **Availability**: the seam deciding whether an hour is already booked
//! - **Pricing**: end-time arithmetic and itemised cost computation
//! - **Suggestions**: merging, ranking and resolving equipment recommendations
//! - **Draft**: the booking-in-progress state machine tying the above together
//! - **Policy** and **History**: the backend's rental rules, and a user's
//!   rentals split into upcoming and past
//!
//! A typical flow: pick a day from [`calendar::list_selectable_days`], pick a slot
//! from [`calendar::SlotCalendar::slots_for`], pick equipment (optionally from
//! [`suggestions::EquipmentSuggestionRanker`]), then turn the
//! [`draft::BookingDraft`] into a [`sportslink_core::models::rental::RentalRequest`].

/// Availability rules for hourly slots
pub mod availability;
/// Month grids and hourly slot enumeration
pub mod calendar;
/// Facility equipment catalog and picker filters
pub mod catalog;
/// Environment-driven configuration
pub mod config;
/// Booking draft lifecycle
pub mod draft;
/// Upcoming and past rentals of a user
pub mod history;
/// Client-side mirror of the backend's rental rules
pub mod policy;
/// Money, durations, end times and cost breakdowns
pub mod pricing;
/// Equipment, facility and owner suggestion ranking
pub mod suggestions;

pub use sportslink_core::errors::{BookingError, BookingResult};
