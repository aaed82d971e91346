//! # Pricing
//!
//! End-time arithmetic and cost breakdowns for a booking.
//!
//! Money is held as integer cents. Hourly rates are taken to the cent when
//! they enter the engine ([`Money::from_amount`]), so a rate of `0.333` is
//! charged as 33¢ per hour. Each line item (field, then every piece of
//! equipment) is then `rate_cents × minutes / 60`, rounded to the cent half
//! away from zero, and the total is the exact sum of the rounded line items.
//! The same inputs therefore always produce the same breakdown, bit for bit.

use std::{fmt, iter::Sum, ops::Add};

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use sportslink_core::{
    errors::{BookingError, BookingResult},
    models::equipment::EquipmentItem,
};
use tracing::debug;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Largest amount accepted, in currency units
const MAX_AMOUNT: f64 = 1.0e12;

/// A non-negative amount of money in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// # Errors
    ///
    /// `InvalidInput` for negative amounts.
    pub fn from_cents(cents: i64) -> BookingResult<Self> {
        if cents < 0 {
            return Err(BookingError::invalid_input(format!(
                "Amount must not be negative, got {} cents",
                cents
            )));
        }
        Ok(Self(cents))
    }

    /// Converts a currency amount (e.g. `12.5`) rounding to the cent.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for NaN, infinite, negative or absurdly large amounts.
    pub fn from_amount(amount: f64) -> BookingResult<Self> {
        if !amount.is_finite() {
            debug!(amount, "rejecting non-finite amount");
            return Err(BookingError::invalid_input(format!(
                "Amount must be a finite number, got {}",
                amount
            )));
        }
        if amount < 0.0 {
            debug!(amount, "rejecting negative amount");
            return Err(BookingError::invalid_input(format!(
                "Amount must not be negative, got {}",
                amount
            )));
        }
        if amount > MAX_AMOUNT {
            return Err(BookingError::invalid_input(format!(
                "Amount {} is too large",
                amount
            )));
        }

        Ok(Self((amount * 100.0).round() as i64))
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Cost of holding something priced at `self` per hour for `duration`.
    pub fn for_duration(self, duration: BookingDuration) -> Money {
        let numerator = i128::from(self.0) * i128::from(duration.minutes());
        // half away from zero; both factors are non-negative
        let cents = (numerator + 30) / 60;
        Money(i64::try_from(cents).unwrap_or(i64::MAX))
    }
}

impl TryFrom<i64> for Money {
    type Error = BookingError;

    fn try_from(cents: i64) -> BookingResult<Self> {
        Money::from_cents(cents)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> i64 {
        money.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "€{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Length of a booking in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingDuration(u32);

impl BookingDuration {
    pub const ONE_HOUR: BookingDuration = BookingDuration(60);

    /// Accepts fractional hours (1.5 → 90 minutes), rounded to the minute.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for NaN, infinite or negative values.
    pub fn from_hours(hours: f64) -> BookingResult<Self> {
        if !hours.is_finite() || hours < 0.0 {
            debug!(hours, "rejecting duration");
            return Err(BookingError::invalid_input(format!(
                "Duration must be a non-negative number of hours, got {}",
                hours
            )));
        }

        let minutes = (hours * 60.0).round();
        if minutes > f64::from(u32::MAX) {
            return Err(BookingError::invalid_input(format!(
                "Duration of {} hours is too long",
                hours
            )));
        }

        Ok(Self(minutes as u32))
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hours(self) -> f64 {
        f64::from(self.0) / 60.0
    }

    pub fn as_delta(self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.0))
    }
}

impl Default for BookingDuration {
    fn default() -> Self {
        Self::ONE_HOUR
    }
}

impl fmt::Display for BookingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

/// Anything with an hourly rate.
pub trait Priced {
    fn price_per_hour(&self) -> f64;
}

impl Priced for f64 {
    fn price_per_hour(&self) -> f64 {
        *self
    }
}

impl Priced for Money {
    fn price_per_hour(&self) -> f64 {
        self.as_f64()
    }
}

impl Priced for EquipmentItem {
    fn price_per_hour(&self) -> f64 {
        self.price_per_hour
    }
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price_per_hour(&self) -> f64 {
        (**self).price_per_hour()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub field_cost: Money,
    /// One entry per selected item, in selection order
    pub equipment_costs: Vec<Money>,
    pub total: Money,
}

impl CostBreakdown {
    pub fn equipment_total(&self) -> Money {
        self.equipment_costs.iter().copied().sum()
    }
}

/// Minutes since midnight of an "HH:MM" string.
pub fn parse_clock(time: &str) -> BookingResult<u32> {
    let invalid = || BookingError::invalid_input(format!("Invalid time '{}', expected HH:MM", time));

    let (hours, minutes) = time.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded "HH:MM", wrapping past 24h.
pub fn format_clock(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `start + duration`, wrapped to the 24-hour clock.
///
/// Intervals crossing midnight cannot be inverted from the result alone:
/// "23:00" plus 2h gives "01:00", which is also "00:00" plus 1h.
///
/// # Examples
///
/// ```
/// use sportslink_booking::pricing::compute_end_time;
///
/// assert_eq!(compute_end_time("10:00", 1.5).unwrap(), "11:30");
/// assert_eq!(compute_end_time("23:00", 2.0).unwrap(), "01:00");
/// ```
pub fn compute_end_time(start_time: &str, duration_hours: f64) -> BookingResult<String> {
    let start = parse_clock(start_time)?;
    let duration = BookingDuration::from_hours(duration_hours)?;
    let end = (u64::from(start) + u64::from(duration.minutes())) % u64::from(MINUTES_PER_DAY);

    Ok(format_clock(end as u32))
}

/// Typed counterpart of [`compute_end_time`].
pub fn end_time(start: NaiveTime, duration: BookingDuration) -> NaiveTime {
    start.overflowing_add_signed(duration.as_delta()).0
}

/// Itemised cost from already validated rates.
pub fn quote<I>(field_rate: Money, duration: BookingDuration, equipment_rates: I) -> CostBreakdown
where
    I: IntoIterator<Item = Money>,
{
    let field_cost = field_rate.for_duration(duration);
    let equipment_costs: Vec<Money> = equipment_rates
        .into_iter()
        .map(|rate| rate.for_duration(duration))
        .collect();
    let total = field_cost + equipment_costs.iter().copied().sum::<Money>();

    CostBreakdown {
        field_cost,
        equipment_costs,
        total,
    }
}

/// Field cost, per-item equipment costs and their total.
///
/// # Errors
///
/// `InvalidInput` if the facility rate, the duration or any equipment rate is
/// negative, NaN or infinite. Nothing is coerced to zero.
pub fn compute_cost<P: Priced>(
    facility_price_per_hour: f64,
    duration_hours: f64,
    selected_equipment: &[P],
) -> BookingResult<CostBreakdown> {
    let field_rate = Money::from_amount(facility_price_per_hour)?;
    let duration = BookingDuration::from_hours(duration_hours)?;
    let rates = selected_equipment
        .iter()
        .map(|item| Money::from_amount(item.price_per_hour()))
        .collect::<BookingResult<Vec<_>>>()?;

    Ok(quote(field_rate, duration, rates))
}

/// Per-hour sum of the given items, shown while equipment is being picked.
pub fn hourly_subtotal<P: Priced>(items: &[P]) -> BookingResult<Money> {
    items
        .iter()
        .map(|item| Money::from_amount(item.price_per_hour()))
        .sum::<BookingResult<Money>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("10:00", 1.5, "11:30")]
    #[case("23:00", 2.0, "01:00")]
    #[case("09:15", 1.0, "10:15")]
    #[case("00:00", 24.0, "00:00")]
    #[case("21:45", 0.25, "22:00")]
    fn test_compute_end_time(#[case] start: &str, #[case] hours: f64, #[case] expected: &str) {
        assert_eq!(compute_end_time(start, hours).unwrap(), expected);
    }

    #[rstest]
    #[case("25:00")]
    #[case("10:60")]
    #[case("10")]
    #[case("ab:cd")]
    #[case("")]
    fn test_compute_end_time_rejects_bad_start(#[case] start: &str) {
        assert!(matches!(
            compute_end_time(start, 1.0),
            Err(BookingError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_compute_end_time_rejects_bad_duration(#[case] hours: f64) {
        assert!(compute_end_time("10:00", hours).is_err());
    }

    #[test]
    fn test_end_time_wraps_midnight() {
        let start = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        let end = end_time(start, BookingDuration::from_hours(1.5).unwrap());

        assert_eq!(end, NaiveTime::from_hms_opt(1, 0, 0).unwrap());
    }

    #[test]
    fn test_compute_cost_itemises() {
        let breakdown = compute_cost(20.0, 2.0, &[2.5, 3.0]).unwrap();

        assert_eq!(breakdown.field_cost.as_f64(), 40.0);
        assert_eq!(
            breakdown.equipment_costs.iter().map(|c| c.as_f64()).collect::<Vec<_>>(),
            vec![5.0, 6.0]
        );
        assert_eq!(breakdown.total.as_f64(), 51.0);
    }

    #[test]
    fn test_compute_cost_rounds_line_items_to_cents() {
        // the rate 0.333 becomes 33¢, then 33¢ * 90 / 60 = 49.5¢ -> 50¢
        let breakdown = compute_cost(0.333, 1.5, &[0.01]).unwrap();

        assert_eq!(breakdown.field_cost.cents(), 50);
        // 1¢ * 90 / 60 = 1.5¢ -> 2¢
        assert_eq!(breakdown.equipment_costs, vec![Money::from_cents(2).unwrap()]);
        assert_eq!(breakdown.total.cents(), 52);
    }

    #[test]
    fn test_rates_are_taken_to_the_cent_first() {
        // 0.336 * 1.5 would be 50.4¢, but the rate is charged as 34¢: 34¢ * 1.5 = 51¢
        let breakdown = compute_cost(0.336, 1.5, &[] as &[f64]).unwrap();

        assert_eq!(breakdown.field_cost.cents(), 51);
    }

    #[test]
    fn test_negative_cents_rejected() {
        assert!(matches!(Money::from_cents(-1), Err(BookingError::InvalidInput(_))));
        assert_eq!(Money::from_cents(0).unwrap(), Money::ZERO);
        assert!(serde_json::from_str::<Money>("-5").is_err());
        assert_eq!(serde_json::from_str::<Money>("125").unwrap().cents(), 125);
    }

    #[rstest]
    #[case(-5.0, 1.0, 0.0)]
    #[case(f64::NAN, 1.0, 0.0)]
    #[case(10.0, -1.0, 0.0)]
    #[case(10.0, 1.0, -2.0)]
    #[case(10.0, 1.0, f64::NAN)]
    fn test_compute_cost_rejects_invalid(
        #[case] facility: f64,
        #[case] hours: f64,
        #[case] equipment: f64,
    ) {
        assert!(matches!(
            compute_cost(facility, hours, &[equipment]),
            Err(BookingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_amount(51.0).unwrap().to_string(), "€51.00");
        assert_eq!(Money::from_amount(3.75).unwrap().to_string(), "€3.75");
        assert_eq!(Money::ZERO.to_string(), "€0.00");
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(BookingDuration::from_hours(1.5).unwrap().to_string(), "1.5h");
        assert_eq!(BookingDuration::from_hours(2.0).unwrap().to_string(), "2h");
    }

    #[test]
    fn test_hourly_subtotal() {
        let subtotal = hourly_subtotal(&[2.5, 3.0, 1.25]).unwrap();

        assert_eq!(subtotal.cents(), 675);
        assert!(hourly_subtotal(&[1.0, -1.0]).is_err());
    }
}
