//! # Booking Configuration
//!
//! Tunables for the booking engine, read from environment variables with
//! defaults matching the rental backend's current rules.
//!
//! ## Environment Variables
//!
//! - `SPORTSLINK_DEFAULT_OPENING_HOUR`: opening hour used when a facility declares none (default: 9)
//! - `SPORTSLINK_DEFAULT_CLOSING_HOUR`: closing hour used when a facility declares none (default: 22)
//! - `SPORTSLINK_HIGHLY_RECOMMENDED_SCORE`: equipment scores strictly above this get the badge (default: 80)
//! - `SPORTSLINK_MIN_RENTAL_HOURS`: shortest rental accepted (default: 1)
//! - `SPORTSLINK_MAX_RENTAL_HOURS`: longest rental accepted (default: 4)
//! - `SPORTSLINK_MIN_LEAD_HOURS`: how far ahead a rental must start (default: 1)
//! - `SPORTSLINK_MAX_ADVANCE_DAYS`: how far ahead a rental may start (default: 30)
//! - `SPORTSLINK_MIN_UPDATE_LEAD_HOURS`: how far ahead a rescheduled rental must start (default: 24)

use std::{env, str::FromStr};

use eyre::{Result, WrapErr, eyre};

/// Configuration for the booking engine
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use sportslink_booking::config::BookingConfig;
///
/// fn example() -> Result<()> {
///     let config = BookingConfig::from_env()?;
///     println!("Default hours: {}-{}", config.default_opening_hour, config.default_closing_hour);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfig {
    /// Opening hour for facilities without declared operating hours
    pub default_opening_hour: u32,

    /// Closing hour (exclusive) for facilities without declared operating hours
    pub default_closing_hour: u32,

    /// Score above which equipment is "Highly Recommended"
    pub highly_recommended_score: f64,

    /// Minimum rental length in hours
    pub min_rental_hours: u32,

    /// Maximum rental length in hours
    pub max_rental_hours: u32,

    /// Minimum notice before a rental starts, in hours
    pub min_lead_hours: u32,

    /// Maximum days in advance a rental may be booked
    pub max_advance_days: u32,

    /// Minimum notice before the new start of a rescheduled rental, in hours
    pub min_update_lead_hours: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_opening_hour: 9,
            default_closing_hour: 22,
            highly_recommended_score: 80.0,
            min_rental_hours: 1,
            max_rental_hours: 4,
            min_lead_hours: 1,
            max_advance_days: 30,
            min_update_lead_hours: 24,
        }
    }
}

impl BookingConfig {
    /// Creates a new BookingConfig from environment variables
    ///
    /// Unset variables take their default. A variable that is set but does
    /// not parse is an error rather than a silent fallback.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - Any variable is set to a value that cannot be parsed
    /// - The resulting default hours are not a valid window within a day
    /// - The minimum rental length exceeds the maximum
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            default_opening_hour: read_var(
                "SPORTSLINK_DEFAULT_OPENING_HOUR",
                defaults.default_opening_hour,
            )?,
            default_closing_hour: read_var(
                "SPORTSLINK_DEFAULT_CLOSING_HOUR",
                defaults.default_closing_hour,
            )?,
            highly_recommended_score: read_var(
                "SPORTSLINK_HIGHLY_RECOMMENDED_SCORE",
                defaults.highly_recommended_score,
            )?,
            min_rental_hours: read_var("SPORTSLINK_MIN_RENTAL_HOURS", defaults.min_rental_hours)?,
            max_rental_hours: read_var("SPORTSLINK_MAX_RENTAL_HOURS", defaults.max_rental_hours)?,
            min_lead_hours: read_var("SPORTSLINK_MIN_LEAD_HOURS", defaults.min_lead_hours)?,
            max_advance_days: read_var("SPORTSLINK_MAX_ADVANCE_DAYS", defaults.max_advance_days)?,
            min_update_lead_hours: read_var(
                "SPORTSLINK_MIN_UPDATE_LEAD_HOURS",
                defaults.min_update_lead_hours,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks the cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.default_closing_hour > 24 || self.default_opening_hour >= self.default_closing_hour {
            return Err(eyre!(
                "Default operating hours {}-{} are not a valid window",
                self.default_opening_hour,
                self.default_closing_hour
            ));
        }

        if self.min_rental_hours > self.max_rental_hours {
            return Err(eyre!(
                "Minimum rental length {}h exceeds maximum {}h",
                self.min_rental_hours,
                self.max_rental_hours
            ));
        }

        if !self.highly_recommended_score.is_finite() {
            return Err(eyre!("Highly recommended score must be a finite number"));
        }

        Ok(())
    }
}

fn read_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}
