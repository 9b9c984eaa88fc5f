//! Calculation result models for the Attendance Budget Engine.
//!
//! This module contains the [`AttendanceCalculation`] type and the per-session
//! [`SessionBudget`] it is built from, together with the audit steps that
//! explain each figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SessionType;

/// Risk tier derived from the usage percentage.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RiskStatus;
///
/// let status = RiskStatus::Warning;
/// assert_eq!(serde_json::to_string(&status).unwrap(), "\"warning\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    /// Below 50% of the budget used.
    Safe,
    /// At least 50% and below 80% used.
    Warning,
    /// 80% or more used.
    Danger,
}

impl RiskStatus {
    /// Returns the snake_case name used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Safe => "safe",
            RiskStatus::Warning => "warning",
            RiskStatus::Danger => "danger",
        }
    }
}

/// Absence budget figures for one session type of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBudget {
    /// The session type these figures describe.
    pub session_type: SessionType,
    /// Total scheduled hours in the semester (`weekly_hours * total_weeks`).
    pub total_session_hours: Decimal,
    /// Absence budget, rounded half-up to a whole number of hours.
    pub max_absent_hours: Decimal,
    /// Sum of hours of absent records of this type.
    pub current_absent_hours: Decimal,
    /// Budget left, never negative.
    pub remaining_hours: Decimal,
    /// Share of the budget used. Exceeds 100 when the budget is overrun.
    pub usage_percent: Decimal,
    /// Risk tier for `usage_percent`.
    pub status: RiskStatus,
}

impl SessionBudget {
    /// Returns true if more hours were missed than the budget allows.
    pub fn is_exceeded(&self) -> bool {
        self.current_absent_hours > self.max_absent_hours
    }

    /// Returns the share of the budget still available, 0-100.
    ///
    /// A session type without budget reports full health.
    pub fn health_percent(&self) -> Decimal {
        if self.max_absent_hours <= Decimal::ZERO {
            return Decimal::ONE_HUNDRED;
        }
        let left = self
            .max_absent_hours
            .saturating_sub(self.current_absent_hours)
            .checked_div(self.max_absent_hours)
            .unwrap_or(Decimal::ZERO)
            .saturating_mul(Decimal::ONE_HUNDRED);
        left.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED)
    }
}

/// A single step in the audit trail of a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the figures.
    pub reasoning: String,
}

/// The complete absence calculation for one course.
///
/// Calling the calculator twice with identical inputs yields equal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCalculation {
    /// The course the calculation is for.
    pub course_id: String,
    /// Semester length the budget was derived from.
    pub total_weeks: u32,
    /// Theory (T) figures.
    pub theory: SessionBudget,
    /// Practice (U) figures.
    pub practice: SessionBudget,
    /// True if either session type is in danger.
    pub is_critical: bool,
    /// Audit trail, theory step first.
    pub audit_steps: Vec<AuditStep>,
}

impl AttendanceCalculation {
    /// Returns the figures for a session type.
    pub fn budget(&self, session_type: SessionType) -> &SessionBudget {
        match session_type {
            SessionType::Theory => &self.theory,
            SessionType::Practice => &self.practice,
        }
    }

    /// Returns absent hours across both session types.
    pub fn total_absent_hours(&self) -> Decimal {
        self.theory
            .current_absent_hours
            .saturating_add(self.practice.current_absent_hours)
    }
}
