//! Risk tier classification of absence budget usage.

use rust_decimal::Decimal;

use crate::models::RiskStatus;

/// Usage percentage at which a session type enters the warning tier.
pub const WARNING_THRESHOLD_PERCENT: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Usage percentage at which a session type enters the danger tier.
pub const DANGER_THRESHOLD_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Classifies a usage percentage.
///
/// Each tier is inclusive at its lower bound.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::classify_usage;
/// use attendance_engine::models::RiskStatus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_usage(Decimal::from(49)), RiskStatus::Safe);
/// assert_eq!(classify_usage(Decimal::from(50)), RiskStatus::Warning);
/// assert_eq!(classify_usage(Decimal::from(80)), RiskStatus::Danger);
/// ```
pub fn classify_usage(usage_percent: Decimal) -> RiskStatus {
    if usage_percent >= DANGER_THRESHOLD_PERCENT {
        RiskStatus::Danger
    } else if usage_percent >= WARNING_THRESHOLD_PERCENT {
        RiskStatus::Warning
    } else {
        RiskStatus::Safe
    }
}
