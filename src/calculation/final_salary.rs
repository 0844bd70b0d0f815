//! Attendance-based final salary calculation.
//!
//! This module pro-rates a monthly gross pay over the paid days of the month
//! and subtracts advance, PF and ESI deductions.

use rust_decimal::Decimal;

use crate::config::EngineSettings;
use crate::models::{
    AuditStep, FinalSalaryCalculation, FinalSalaryDraft, FinalSalaryValidationError,
};

use super::input::{is_valid_mobile, parse_amount, parse_decimal};

/// Parsed inputs to [`calculate_final_salary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalSalaryInput {
    /// Mobile number as entered.
    pub mobile: String,
    /// Basic salary.
    pub basic: Decimal,
    /// Dearness allowance.
    pub da: Decimal,
    /// Other allowance.
    pub other_allowance: Decimal,
    /// Days present.
    pub present_days: Decimal,
    /// Days on paid leave.
    pub paid_leave_days: Decimal,
    /// Weekly off days.
    pub weekly_off_days: Decimal,
    /// Days in the month.
    pub total_days_in_month: Decimal,
    /// Salary advance to recover.
    pub salary_advance: Decimal,
    /// Provident fund deduction.
    pub pf_deduction: Decimal,
    /// Employee state insurance deduction.
    pub esi_deduction: Decimal,
}

impl FinalSalaryInput {
    /// Parses a draft.
    ///
    /// Blank or unparsable amounts count as zero, except days in month which
    /// falls back to the configured default.
    pub fn from_draft(draft: &FinalSalaryDraft, settings: &EngineSettings) -> Self {
        Self {
            mobile: draft.mobile.clone(),
            basic: parse_amount(&draft.basic),
            da: parse_amount(&draft.da),
            other_allowance: parse_amount(&draft.other_allowance),
            present_days: parse_amount(&draft.present_days),
            paid_leave_days: parse_amount(&draft.paid_leave_days),
            weekly_off_days: parse_amount(&draft.weekly_off_days),
            total_days_in_month: parse_decimal(&draft.total_days_in_month)
                .unwrap_or(settings.default_total_days),
            salary_advance: parse_amount(&draft.salary_advance),
            pf_deduction: parse_amount(&draft.pf_deduction),
            esi_deduction: parse_amount(&draft.esi_deduction),
        }
    }

    /// Basic + DA + Other allowance, or `None` if the sum overflows.
    pub fn monthly_gross_pay(&self) -> Option<Decimal> {
        self.basic
            .checked_add(self.da)?
            .checked_add(self.other_allowance)
    }

    /// Present + paid leave + weekly off days, or `None` if the sum overflows.
    pub fn paid_days(&self) -> Option<Decimal> {
        self.present_days
            .checked_add(self.paid_leave_days)?
            .checked_add(self.weekly_off_days)
    }

    /// Advance + PF + ESI, or `None` if the sum overflows.
    pub fn total_deductions(&self) -> Option<Decimal> {
        self.salary_advance
            .checked_add(self.pf_deduction)?
            .checked_add(self.esi_deduction)
    }

    fn totals(&self) -> Option<Totals> {
        let monthly_gross_pay = self.monthly_gross_pay()?;
        let paid_days = self.paid_days()?;
        let earned_salary = if self.total_days_in_month > Decimal::ZERO {
            monthly_gross_pay
                .checked_mul(paid_days)?
                .checked_div(self.total_days_in_month)?
        } else {
            Decimal::ZERO
        };
        let total_deductions = self.total_deductions()?;
        let net_pay = earned_salary.checked_sub(total_deductions)?;
        Some(Totals {
            monthly_gross_pay,
            paid_days,
            earned_salary,
            total_deductions,
            net_pay,
        })
    }

    fn first_failure(&self, totals: Option<&Totals>) -> Option<FinalSalaryValidationError> {
        let zero = Decimal::ZERO;

        if self.mobile.trim().is_empty() {
            return Some(FinalSalaryValidationError::MissingMobile);
        }
        if !is_valid_mobile(&self.mobile) {
            return Some(FinalSalaryValidationError::InvalidMobile);
        }
        let Some(totals) = totals else {
            return Some(FinalSalaryValidationError::AmountOutOfRange);
        };
        if self.present_days < zero || self.paid_leave_days < zero || self.weekly_off_days < zero
        {
            return Some(FinalSalaryValidationError::NegativeAttendance);
        }
        if totals.paid_days > self.total_days_in_month {
            return Some(FinalSalaryValidationError::PaidDaysExceedTotal);
        }
        if self.total_days_in_month <= zero {
            return Some(FinalSalaryValidationError::NonPositiveTotalDays);
        }
        if self.salary_advance < zero || self.pf_deduction < zero || self.esi_deduction < zero {
            return Some(FinalSalaryValidationError::NegativeDeduction);
        }
        if totals.monthly_gross_pay <= zero {
            return Some(FinalSalaryValidationError::NonPositiveGross);
        }
        if totals.net_pay < zero {
            return Some(FinalSalaryValidationError::NegativeNetPay);
        }
        None
    }
}

/// Derived figures of a draft whose arithmetic stayed in range.
struct Totals {
    monthly_gross_pay: Decimal,
    paid_days: Decimal,
    earned_salary: Decimal,
    total_deductions: Decimal,
    net_pay: Decimal,
}

/// Calculates the attendance-based final salary.
///
/// - `paid_days = present + paid leave + weekly off`
/// - `earned_salary = monthly_gross_pay * paid_days / total_days_in_month`
/// - `net_pay = earned_salary - (advance + pf + esi)`
///
/// Validation never panics or errors; the first failing rule is reported in
/// the result and the pay figures are zeroed. Inputs whose arithmetic would
/// overflow are reported as [`FinalSalaryValidationError::AmountOutOfRange`]
/// once the mobile number has been checked, and their gross pay and paid
/// days are reported as zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{calculate_final_salary, FinalSalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = FinalSalaryInput {
///     mobile: "9876543210".to_string(),
///     basic: Decimal::new(1000, 0),
///     da: Decimal::new(8419, 0),
///     other_allowance: Decimal::new(581, 0),
///     present_days: Decimal::new(20, 0),
///     paid_leave_days: Decimal::new(2, 0),
///     weekly_off_days: Decimal::new(4, 0),
///     total_days_in_month: Decimal::new(30, 0),
///     salary_advance: Decimal::new(500, 0),
///     pf_deduction: Decimal::new(300, 0),
///     esi_deduction: Decimal::new(100, 0),
/// };
/// let result = calculate_final_salary(&input);
/// assert!(result.is_valid);
/// assert_eq!(result.net_pay.round_dp(2), Decimal::new(776667, 2));
/// ```
pub fn calculate_final_salary(input: &FinalSalaryInput) -> FinalSalaryCalculation {
    let totals = input.totals();
    let error = input.first_failure(totals.as_ref());

    let monthly_gross_pay = totals.as_ref().map_or(Decimal::ZERO, |t| t.monthly_gross_pay);
    let paid_days = totals.as_ref().map_or(Decimal::ZERO, |t| t.paid_days);

    let (earned_salary, total_deductions, net_pay) = match (&totals, error) {
        (Some(totals), None) => (totals.earned_salary, totals.total_deductions, totals.net_pay),
        _ => (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
    };

    let reasoning = match error {
        None => format!(
            "₹{} / {} days x {} paid days = ₹{}; less ₹{} deductions = ₹{}",
            monthly_gross_pay.normalize(),
            input.total_days_in_month.normalize(),
            paid_days.normalize(),
            earned_salary.round_dp(2).normalize(),
            total_deductions.normalize(),
            net_pay.round_dp(2).normalize()
        ),
        Some(err) => format!("Calculation rejected: {}", err),
    };

    let audit_step = AuditStep {
        rule_id: "attendance_final_salary".to_string(),
        rule_name: "Attendance-Based Final Salary".to_string(),
        input: serde_json::json!({
            "monthly_gross_pay": monthly_gross_pay.normalize().to_string(),
            "present_days": input.present_days.normalize().to_string(),
            "paid_leave_days": input.paid_leave_days.normalize().to_string(),
            "weekly_off_days": input.weekly_off_days.normalize().to_string(),
            "total_days_in_month": input.total_days_in_month.normalize().to_string(),
            "salary_advance": input.salary_advance.normalize().to_string(),
            "pf_deduction": input.pf_deduction.normalize().to_string(),
            "esi_deduction": input.esi_deduction.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid_days": paid_days.normalize().to_string(),
            "earned_salary": earned_salary.round_dp(2).normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
            "net_pay": net_pay.round_dp(2).normalize().to_string(),
            "is_valid": error.is_none()
        }),
        reasoning,
    };

    FinalSalaryCalculation {
        monthly_gross_pay,
        paid_days,
        earned_salary,
        total_deductions,
        net_pay,
        is_valid: error.is_none(),
        error,
        audit_step,
    }
}
