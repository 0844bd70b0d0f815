//! Calculation result models for the Salary Engine.
//!
//! This module contains the outputs of the two pure calculators, the typed
//! validation failures they report, and the [`AuditStep`] each calculator
//! records to explain its derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The first failing validation rule of a gross-salary split.
///
/// The `Display` text is the message shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitValidationError {
    /// Gross salary is zero, negative or missing.
    #[error("Gross salary must be greater than 0")]
    NonPositiveGross,
    /// An amount is too large for the split to be computed.
    #[error("Amounts are too large to calculate")]
    AmountOutOfRange,
    /// Basic plus DA is larger than gross salary.
    #[error("Basic + DA cannot exceed Gross Salary")]
    BasicPlusDaExceedsGross,
    /// The unfloored remainder after Basic and DA is negative.
    #[error("Other components cannot be negative. Basic + DA exceeds Gross Salary.")]
    NegativeOther,
    /// The TN hotel rule percentage is negative.
    #[error("Basic percentage cannot be negative")]
    NegativePercentage,
    /// A manually entered Basic is negative.
    #[error("Basic salary cannot be negative")]
    NegativeBasic,
}

/// The result of splitting a gross salary into Basic, DA and Other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossSplitResult {
    /// The gross salary the split was computed from.
    pub gross_salary: Decimal,
    /// The resolved Basic component.
    pub basic: Decimal,
    /// The fixed dearness allowance.
    pub da: Decimal,
    /// `gross - basic - da`, floored at zero for display.
    pub other: Decimal,
    /// Whether every validation rule passed.
    pub is_valid: bool,
    /// The first failing rule, if any.
    pub error: Option<SplitValidationError>,
    /// The audit step describing the derivation.
    pub audit_step: AuditStep,
}

impl GrossSplitResult {
    /// Returns the operator-facing error message, or an empty string when valid.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// The first failing validation rule of an attendance-based final salary.
///
/// The `Display` text is the message shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalSalaryValidationError {
    /// No mobile number was entered.
    #[error("Mobile number is required for messaging")]
    MissingMobile,
    /// The mobile number is not exactly ten digits.
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
    /// An amount or day count is too large for the pay to be computed.
    #[error("Amounts are too large to calculate")]
    AmountOutOfRange,
    /// Present, paid-leave or weekly-off days are negative.
    #[error("Attendance values cannot be negative")]
    NegativeAttendance,
    /// Paid days exceed the days in the month.
    #[error("Paid Days cannot exceed Total Days in Month")]
    PaidDaysExceedTotal,
    /// Days in the month is zero or negative.
    #[error("Total days in month must be greater than zero")]
    NonPositiveTotalDays,
    /// Advance, PF or ESI deduction is negative.
    #[error("Deductions and advance cannot be negative")]
    NegativeDeduction,
    /// Basic + DA + Other is zero or negative.
    #[error("Monthly Gross Pay must be greater than zero")]
    NonPositiveGross,
    /// Deductions exceed earned salary.
    #[error("Net Pay cannot be negative. Please check deductions and advance.")]
    NegativeNetPay,
}

/// The result of an attendance-based final salary calculation.
///
/// When invalid, `earned_salary`, `total_deductions` and `net_pay` are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSalaryCalculation {
    /// Basic + DA + Other allowance.
    pub monthly_gross_pay: Decimal,
    /// Present + paid leave + weekly off days.
    pub paid_days: Decimal,
    /// Pro-rata salary for the paid days.
    pub earned_salary: Decimal,
    /// Advance + PF + ESI.
    pub total_deductions: Decimal,
    /// Earned salary minus deductions.
    pub net_pay: Decimal,
    /// Whether every validation rule passed.
    pub is_valid: bool,
    /// The first failing rule, if any.
    pub error: Option<FinalSalaryValidationError>,
    /// The audit step describing the derivation.
    pub audit_step: AuditStep,
}

impl FinalSalaryCalculation {
    /// Returns the operator-facing error message, or an empty string when valid.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}
