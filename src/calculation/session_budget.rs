//! Absence budget calculation for a single session type.
//!
//! This module derives every figure of a [`SessionBudget`] from the weekly
//! hours, the limit percentage and the hours already missed, and records the
//! derivation as an audit step.

use rust_decimal::Decimal;

use super::absence_budget::{max_absent_hours, percent_of, total_session_hours};
use super::risk_status::classify_usage;
use crate::models::{AttendanceRecord, AuditStep, SessionBudget, SessionType};

/// The result of calculating one session type, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionBudgetResult {
    /// The calculated figures.
    pub budget: SessionBudget,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums the hours of absent records of one course and session type.
///
/// Each record contributes its own `hours`, not the course's weekly default.
/// Records of other courses are skipped. The sum saturates at `Decimal::MAX`.
pub fn sum_absent_hours(
    records: &[AttendanceRecord],
    course_id: &str,
    session_type: SessionType,
) -> Decimal {
    records
        .iter()
        .filter(|r| r.belongs_to(course_id) && r.session_type == session_type && r.is_absence())
        .fold(Decimal::ZERO, |total, r| total.saturating_add(r.hours))
}

/// Calculates the absence budget of one session type.
///
/// # Arguments
///
/// * `session_type` - Which component of the course is calculated
/// * `weekly_hours` - Scheduled hours per week for this component
/// * `limit_percent` - Share of total hours that may be missed
/// * `absent_hours` - Hours already missed
/// * `total_weeks` - Semester length in weeks
/// * `step_number` - The step number for audit trail sequencing
///
/// A component without weekly hours has no budget; its usage is reported as
/// 0% and its status as safe, whatever `absent_hours` says.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_session_budget;
/// use attendance_engine::models::{RiskStatus, SessionType};
/// use rust_decimal::Decimal;
///
/// let result = calculate_session_budget(
///     SessionType::Theory,
///     3,
///     Decimal::from(30),
///     Decimal::from(9),
///     14,
///     1,
/// );
///
/// assert_eq!(result.budget.total_session_hours, Decimal::from(42));
/// assert_eq!(result.budget.max_absent_hours, Decimal::from(13));
/// assert_eq!(result.budget.remaining_hours, Decimal::from(4));
/// assert_eq!(result.budget.status, RiskStatus::Warning);
/// ```
pub fn calculate_session_budget(
    session_type: SessionType,
    weekly_hours: u32,
    limit_percent: Decimal,
    absent_hours: Decimal,
    total_weeks: u32,
    step_number: u32,
) -> SessionBudgetResult {
    let total_hours = total_session_hours(weekly_hours, total_weeks);
    let max_hours = max_absent_hours(total_hours, limit_percent);
    let remaining_hours = max_hours.saturating_sub(absent_hours).max(Decimal::ZERO);

    let usage_percent = if max_hours > Decimal::ZERO {
        absent_hours
            .checked_div(max_hours)
            .unwrap_or(Decimal::MAX)
            .saturating_mul(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };
    let status = classify_usage(usage_percent);

    let reasoning = if max_hours > Decimal::ZERO {
        format!(
            "{}h x {} weeks = {}h; {}h x {}% = {}, rounded to {}h; {}h absent leaves {}h ({}% used, {})",
            weekly_hours,
            total_weeks,
            total_hours,
            total_hours,
            limit_percent.normalize(),
            percent_of(total_hours, limit_percent).normalize(),
            max_hours,
            absent_hours.normalize(),
            remaining_hours.normalize(),
            usage_percent.round_dp(2).normalize(),
            status.as_str()
        )
    } else {
        format!(
            "No {} absence budget ({}h x {} weeks at {}%) - usage reported as 0%",
            session_type.as_str(),
            weekly_hours,
            total_weeks,
            limit_percent.normalize()
        )
    };

    let rule_id = format!("{}_absence_budget", session_type.as_str());
    let rule_name = match session_type {
        SessionType::Theory => "Theory Absence Budget",
        SessionType::Practice => "Practice Absence Budget",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id,
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "weekly_hours": weekly_hours,
            "limit_percent": limit_percent.normalize().to_string(),
            "total_weeks": total_weeks,
            "absent_hours": absent_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_session_hours": total_hours.to_string(),
            "max_absent_hours": max_hours.to_string(),
            "remaining_hours": remaining_hours.normalize().to_string(),
            "usage_percent": usage_percent.round_dp(2).normalize().to_string(),
            "status": status.as_str()
        }),
        reasoning,
    };

    SessionBudgetResult {
        budget: SessionBudget {
            session_type,
            total_session_hours: total_hours,
            max_absent_hours: max_hours,
            current_absent_hours: absent_hours,
            remaining_hours,
            usage_percent,
            status,
        },
        audit_step,
    }
}
