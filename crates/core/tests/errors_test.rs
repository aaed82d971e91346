use std::error::Error;

use pretty_assertions::assert_eq;
use sportslink_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let invalid = BookingError::invalid_input("Duration must be positive");
    let not_found = BookingError::NotFound("Equipment 77".to_string());
    let state = BookingError::invalid_state("No slot selected");
    let policy = BookingError::PolicyViolation("Cannot create rental in the past".to_string());
    let external = BookingError::ExternalService("HTTP 409".to_string());

    assert_eq!(invalid.to_string(), "Invalid input: Duration must be positive");
    assert_eq!(not_found.to_string(), "Resource not found: Equipment 77");
    assert_eq!(state.to_string(), "Invalid booking state: No slot selected");
    assert_eq!(
        policy.to_string(),
        "Rental policy violation: Cannot create rental in the past"
    );
    assert_eq!(external.to_string(), "External service failure: HTTP 409");
}

#[test]
fn test_config_error_conversion() {
    let report = eyre::eyre!("SPORTSLINK_MAX_RENTAL_HOURS is not a number");
    let error: BookingError = report.into();

    assert!(matches!(error, BookingError::Config(_)));
    assert!(error.to_string().starts_with("Configuration error:"));
    assert!(error.source().is_some());
}

#[test]
fn test_booking_result() {
    fn lookup(found: bool) -> BookingResult<u32> {
        if found {
            Ok(1)
        } else {
            Err(BookingError::NotFound("Facility 9".to_string()))
        }
    }

    assert_eq!(lookup(true).unwrap(), 1);
    assert!(matches!(lookup(false), Err(BookingError::NotFound(_))));
}
