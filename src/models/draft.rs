//! Final salary draft model.
//!
//! A [`FinalSalaryDraft`] holds the raw operator input for one employee's
//! attendance-based salary before it is finalized into the ledger.

use serde::{Deserialize, Serialize};

use crate::config::EngineSettings;

use super::Staff;

/// Identifies a single editable field of a [`FinalSalaryDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    /// Employee name.
    Name,
    /// Mobile number.
    Mobile,
    /// Provident fund account number.
    PfNumber,
    /// Employee state insurance number.
    EsiNumber,
    /// Job designation.
    Designation,
    /// Basic salary.
    Basic,
    /// Dearness allowance.
    Da,
    /// Other allowance.
    OtherAllowance,
    /// Days present.
    PresentDays,
    /// Days on paid leave.
    PaidLeaveDays,
    /// Weekly off days.
    WeeklyOffDays,
    /// Days in the month.
    TotalDaysInMonth,
    /// Salary advance to recover.
    SalaryAdvance,
    /// Provident fund deduction.
    PfDeduction,
    /// Employee state insurance deduction.
    EsiDeduction,
}

/// Raw operator input for an attendance-based salary calculation.
///
/// All numeric fields are kept as typed text; the calculator parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSalaryDraft {
    /// Employee name (optional; defaults on finalize).
    pub name: String,
    /// Mobile number, required.
    pub mobile: String,
    /// Provident fund account number.
    pub pf_number: String,
    /// Employee state insurance number.
    pub esi_number: String,
    /// Job designation as free text.
    pub designation: String,
    /// Basic salary.
    pub basic: String,
    /// Dearness allowance.
    pub da: String,
    /// Other allowance.
    pub other_allowance: String,
    /// Days present.
    pub present_days: String,
    /// Days on paid leave.
    pub paid_leave_days: String,
    /// Weekly off days.
    pub weekly_off_days: String,
    /// Days in the month.
    pub total_days_in_month: String,
    /// Salary advance to recover.
    pub salary_advance: String,
    /// Provident fund deduction.
    pub pf_deduction: String,
    /// Employee state insurance deduction.
    pub esi_deduction: String,
}

impl FinalSalaryDraft {
    /// Creates an empty draft with the configured DA and days-in-month.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::config::EngineSettings;
    /// use salary_engine::models::FinalSalaryDraft;
    ///
    /// let draft = FinalSalaryDraft::from_settings(&EngineSettings::default());
    /// assert_eq!(draft.da, "8419");
    /// assert_eq!(draft.total_days_in_month, "30");
    /// assert_eq!(draft.basic, "0");
    /// ```
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let zero = || "0".to_string();
        Self {
            name: String::new(),
            mobile: String::new(),
            pf_number: String::new(),
            esi_number: String::new(),
            designation: String::new(),
            basic: zero(),
            da: settings.fixed_da.normalize().to_string(),
            other_allowance: zero(),
            present_days: zero(),
            paid_leave_days: zero(),
            weekly_off_days: zero(),
            total_days_in_month: settings.default_total_days.normalize().to_string(),
            salary_advance: zero(),
            pf_deduction: zero(),
            esi_deduction: zero(),
        }
    }

    /// Returns the current text of a field.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Mobile => &self.mobile,
            DraftField::PfNumber => &self.pf_number,
            DraftField::EsiNumber => &self.esi_number,
            DraftField::Designation => &self.designation,
            DraftField::Basic => &self.basic,
            DraftField::Da => &self.da,
            DraftField::OtherAllowance => &self.other_allowance,
            DraftField::PresentDays => &self.present_days,
            DraftField::PaidLeaveDays => &self.paid_leave_days,
            DraftField::WeeklyOffDays => &self.weekly_off_days,
            DraftField::TotalDaysInMonth => &self.total_days_in_month,
            DraftField::SalaryAdvance => &self.salary_advance,
            DraftField::PfDeduction => &self.pf_deduction,
            DraftField::EsiDeduction => &self.esi_deduction,
        }
    }

    /// Replaces the text of a field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Mobile => &mut self.mobile,
            DraftField::PfNumber => &mut self.pf_number,
            DraftField::EsiNumber => &mut self.esi_number,
            DraftField::Designation => &mut self.designation,
            DraftField::Basic => &mut self.basic,
            DraftField::Da => &mut self.da,
            DraftField::OtherAllowance => &mut self.other_allowance,
            DraftField::PresentDays => &mut self.present_days,
            DraftField::PaidLeaveDays => &mut self.paid_leave_days,
            DraftField::WeeklyOffDays => &mut self.weekly_off_days,
            DraftField::TotalDaysInMonth => &mut self.total_days_in_month,
            DraftField::SalaryAdvance => &mut self.salary_advance,
            DraftField::PfDeduction => &mut self.pf_deduction,
            DraftField::EsiDeduction => &mut self.esi_deduction,
        };
        *slot = value.into();
    }

    /// Copies identity and salary components from a staff record.
    ///
    /// Attendance and deduction fields are left untouched.
    pub fn prefill_from_staff(&mut self, staff: &Staff) {
        self.name = staff.name.clone();
        self.mobile = staff.mobile.clone();
        self.designation = staff.designation.clone();
        self.basic = staff.basic.normalize().to_string();
        self.da = staff.da.normalize().to_string();
        self.other_allowance = staff.other_allowance.normalize().to_string();
    }
}
