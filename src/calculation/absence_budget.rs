//! Absence budget derivation.
//!
//! The budget is a percentage of the semester's scheduled hours, rounded
//! half-up to whole hours the way the university information system (OBS)
//! rounds it: 5.5 becomes 6, 5.4 becomes 5.
//!
//! Arithmetic saturates at `Decimal::MAX`/`Decimal::MIN` instead of
//! panicking, so absurd inputs give absurd numbers rather than a fault.

use rust_decimal::Decimal;

/// Rounds to the nearest integer, with halves rounded up.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("5.5").unwrap()), Decimal::from(6));
/// assert_eq!(round_half_up(Decimal::from_str("5.4").unwrap()), Decimal::from(5));
/// assert_eq!(round_half_up(Decimal::from_str("12.6").unwrap()), Decimal::from(13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.saturating_add(Decimal::new(5, 1)).floor()
}

/// Returns the total hours scheduled for a session type over the semester.
pub fn total_session_hours(weekly_hours: u32, total_weeks: u32) -> Decimal {
    Decimal::from(weekly_hours) * Decimal::from(total_weeks)
}

/// Returns the absence budget in whole hours.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::max_absent_hours;
/// use rust_decimal::Decimal;
///
/// // 42 hours at 30% = 12.6, rounded to 13
/// assert_eq!(max_absent_hours(Decimal::from(42), Decimal::from(30)), Decimal::from(13));
/// ```
pub fn max_absent_hours(total_session_hours: Decimal, limit_percent: Decimal) -> Decimal {
    round_half_up(percent_of(total_session_hours, limit_percent))
}

/// Returns `percent`% of `amount`, saturating on overflow.
pub(crate) fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount.saturating_mul(percent) / Decimal::ONE_HUNDRED
}
