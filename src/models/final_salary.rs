//! Finalized employee pay record.
//!
//! This module defines [`FinalSalaryEmployee`], the immutable ledger entry
//! produced by finalizing a valid draft, together with its [`RecordId`] and
//! the re-derived [`PaySummary`].

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a finalized record, unique and increasing in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Earned salary, deductions and net pay derived from a finalized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Pro-rata salary for the paid days.
    pub earned_salary: Decimal,
    /// Advance + PF + ESI.
    pub total_deductions: Decimal,
    /// Earned salary minus deductions.
    pub net_pay: Decimal,
}

/// An employee's finalized pay for one run.
///
/// Records are never mutated after creation; fields are private and exposed
/// through accessors. Correcting a record means deleting and re-finalizing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalSalaryEmployee {
    id: RecordId,
    name: String,
    mobile: String,
    pf_number: String,
    esi_number: String,
    designation: String,
    basic: Decimal,
    da: Decimal,
    other_allowance: Decimal,
    monthly_gross_pay: Decimal,
    present_days: Decimal,
    paid_leave_days: Decimal,
    weekly_off_days: Decimal,
    paid_days: Decimal,
    total_days_in_month: Decimal,
    salary_advance: Decimal,
    pf_deduction: Decimal,
    esi_deduction: Decimal,
    created_at: DateTime<Utc>,
}

/// Owned inputs for [`FinalSalaryEmployee::new`].
///
/// Derived totals (`monthly_gross_pay`, `paid_days`) are computed by the
/// constructor and cannot be supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalSalaryFields {
    /// Employee name.
    pub name: String,
    /// Mobile number, digits only.
    pub mobile: String,
    /// Provident fund account number.
    pub pf_number: String,
    /// Employee state insurance number.
    pub esi_number: String,
    /// Job designation.
    pub designation: String,
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
    /// Salary advance recovered.
    pub salary_advance: Decimal,
    /// Provident fund deduction.
    pub pf_deduction: Decimal,
    /// Employee state insurance deduction.
    pub esi_deduction: Decimal,
}

impl FinalSalaryEmployee {
    /// Builds a record, deriving monthly gross pay and paid days.
    pub fn new(id: RecordId, fields: FinalSalaryFields, created_at: DateTime<Utc>) -> Self {
        let monthly_gross_pay = fields
            .basic
            .saturating_add(fields.da)
            .saturating_add(fields.other_allowance);
        let paid_days = fields
            .present_days
            .saturating_add(fields.paid_leave_days)
            .saturating_add(fields.weekly_off_days);
        Self {
            id,
            name: fields.name,
            mobile: fields.mobile,
            pf_number: fields.pf_number,
            esi_number: fields.esi_number,
            designation: fields.designation,
            basic: fields.basic,
            da: fields.da,
            other_allowance: fields.other_allowance,
            monthly_gross_pay,
            present_days: fields.present_days,
            paid_leave_days: fields.paid_leave_days,
            weekly_off_days: fields.weekly_off_days,
            paid_days,
            total_days_in_month: fields.total_days_in_month,
            salary_advance: fields.salary_advance,
            pf_deduction: fields.pf_deduction,
            esi_deduction: fields.esi_deduction,
            created_at,
        }
    }

    /// Record id.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mobile number, digits only.
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    /// Provident fund account number (may be empty).
    pub fn pf_number(&self) -> &str {
        &self.pf_number
    }

    /// Employee state insurance number (may be empty).
    pub fn esi_number(&self) -> &str {
        &self.esi_number
    }

    /// Job designation (may be empty).
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Basic salary.
    pub fn basic(&self) -> Decimal {
        self.basic
    }

    /// Dearness allowance.
    pub fn da(&self) -> Decimal {
        self.da
    }

    /// Other allowance.
    pub fn other_allowance(&self) -> Decimal {
        self.other_allowance
    }

    /// Basic + DA + Other allowance.
    pub fn monthly_gross_pay(&self) -> Decimal {
        self.monthly_gross_pay
    }

    /// Days present.
    pub fn present_days(&self) -> Decimal {
        self.present_days
    }

    /// Days on paid leave.
    pub fn paid_leave_days(&self) -> Decimal {
        self.paid_leave_days
    }

    /// Weekly off days.
    pub fn weekly_off_days(&self) -> Decimal {
        self.weekly_off_days
    }

    /// Present + paid leave + weekly off days.
    pub fn paid_days(&self) -> Decimal {
        self.paid_days
    }

    /// Days in the month.
    pub fn total_days_in_month(&self) -> Decimal {
        self.total_days_in_month
    }

    /// Salary advance recovered.
    pub fn salary_advance(&self) -> Decimal {
        self.salary_advance
    }

    /// Provident fund deduction.
    pub fn pf_deduction(&self) -> Decimal {
        self.pf_deduction
    }

    /// Employee state insurance deduction.
    pub fn esi_deduction(&self) -> Decimal {
        self.esi_deduction
    }

    /// When the record was finalized.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Re-derives earned salary, deductions and net pay from the stored fields.
    ///
    /// Figures saturate at the `Decimal` bounds instead of overflowing.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    /// use salary_engine::models::{FinalSalaryEmployee, FinalSalaryFields, RecordId};
    ///
    /// let fields = FinalSalaryFields {
    ///     name: "Ravi".to_string(),
    ///     mobile: "9876543210".to_string(),
    ///     pf_number: String::new(),
    ///     esi_number: String::new(),
    ///     designation: String::new(),
    ///     basic: Decimal::new(6000, 0),
    ///     da: Decimal::new(3000, 0),
    ///     other_allowance: Decimal::new(1000, 0),
    ///     present_days: Decimal::new(30, 0),
    ///     paid_leave_days: Decimal::ZERO,
    ///     weekly_off_days: Decimal::ZERO,
    ///     total_days_in_month: Decimal::new(30, 0),
    ///     salary_advance: Decimal::new(500, 0),
    ///     pf_deduction: Decimal::ZERO,
    ///     esi_deduction: Decimal::ZERO,
    /// };
    /// let record = FinalSalaryEmployee::new(RecordId(1), fields, Utc::now());
    /// let summary = record.pay_summary();
    /// assert_eq!(summary.earned_salary, Decimal::new(10000, 0));
    /// assert_eq!(summary.net_pay, Decimal::new(9500, 0));
    /// ```
    pub fn pay_summary(&self) -> PaySummary {
        let earned_salary = if self.total_days_in_month > Decimal::ZERO {
            let scaled = self.monthly_gross_pay.saturating_mul(self.paid_days);
            scaled
                .checked_div(self.total_days_in_month)
                .unwrap_or(if scaled.is_sign_negative() {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                })
        } else {
            Decimal::ZERO
        };
        let total_deductions = self
            .salary_advance
            .saturating_add(self.pf_deduction)
            .saturating_add(self.esi_deduction);
        PaySummary {
            earned_salary,
            total_deductions,
            net_pay: earned_salary.saturating_sub(total_deductions),
        }
    }
}
