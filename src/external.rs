//! Interfaces to collaborators outside the engine.
//!
//! Staff records and monthly attendance live in stores owned by the
//! embedding application. The engine only reads staff to prefill drafts and
//! never writes finalized records back automatically. In-memory
//! implementations are provided for embedding applications and tests.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{FinalSalaryEmployee, Staff};

/// Read-only source of staff records.
pub trait StaffSource {
    /// Returns every staff record.
    fn list_staff(&self) -> EngineResult<Vec<Staff>>;
}

/// Persistence for monthly attendance, keyed by staff name and month.
pub trait AttendanceStore {
    /// Creates or replaces the month for `month.staff_name`.
    fn save_month(&mut self, month: AttendanceMonth) -> EngineResult<()>;

    /// Reads a stored month.
    fn get_month(&self, staff_name: &str, month_year: &str)
    -> EngineResult<Option<AttendanceMonth>>;
}

/// One staff member's attendance and pay inputs for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMonth {
    /// Staff name, the store key together with `month_year`.
    pub staff_name: String,
    /// Month label such as `"2024-06"`.
    pub month_year: String,
    /// Days present.
    pub present_days: Decimal,
    /// Days on paid leave.
    pub paid_leave_days: Decimal,
    /// Weekly off days.
    pub weekly_off_days: Decimal,
    /// Days in the month.
    pub total_days: Decimal,
    /// Basic salary.
    pub basic: Decimal,
    /// Dearness allowance.
    pub da: Decimal,
    /// Other allowance.
    pub other_allowance: Decimal,
    /// Basic + DA + Other allowance.
    pub gross_pay: Decimal,
    /// Salary advance recovered.
    pub salary_advance: Decimal,
    /// Provident fund deduction.
    pub pf_deduction: Decimal,
    /// Employee state insurance deduction.
    pub esi_deduction: Decimal,
}

impl AttendanceMonth {
    /// Copies the numeric fields of a finalized record.
    pub fn from_record(record: &FinalSalaryEmployee, month_year: impl Into<String>) -> Self {
        Self {
            staff_name: record.name().to_string(),
            month_year: month_year.into(),
            present_days: record.present_days(),
            paid_leave_days: record.paid_leave_days(),
            weekly_off_days: record.weekly_off_days(),
            total_days: record.total_days_in_month(),
            basic: record.basic(),
            da: record.da(),
            other_allowance: record.other_allowance(),
            gross_pay: record.monthly_gross_pay(),
            salary_advance: record.salary_advance(),
            pf_deduction: record.pf_deduction(),
            esi_deduction: record.esi_deduction(),
        }
    }
}

/// In-memory staff list.
#[derive(Debug, Clone, Default)]
pub struct StaffDirectory {
    staff: Vec<Staff>,
}

impl StaffDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a staff record.
    pub fn add(&mut self, staff: Staff) -> EngineResult<()> {
        staff.validate()?;
        debug!(staff = %staff.name, designation = %staff.designation, "Staff added");
        self.staff.push(staff);
        Ok(())
    }

    /// Finds a staff record by exact name.
    pub fn find(&self, name: &str) -> Option<&Staff> {
        self.staff.iter().find(|s| s.name == name)
    }

    /// Number of staff records.
    pub fn len(&self) -> usize {
        self.staff.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }
}

impl StaffSource for StaffDirectory {
    fn list_staff(&self) -> EngineResult<Vec<Staff>> {
        Ok(self.staff.clone())
    }
}

/// In-memory attendance store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceStore {
    months: HashMap<(String, String), AttendanceMonth>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored months.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    fn save_month(&mut self, month: AttendanceMonth) -> EngineResult<()> {
        if month.staff_name.trim().is_empty() || month.month_year.trim().is_empty() {
            return Err(EngineError::Collaborator {
                message: "attendance requires a staff name and month".to_string(),
            });
        }
        debug!(staff = %month.staff_name, month_year = %month.month_year, "Attendance saved");
        self.months
            .insert((month.staff_name.clone(), month.month_year.clone()), month);
        Ok(())
    }

    fn get_month(
        &self,
        staff_name: &str,
        month_year: &str,
    ) -> EngineResult<Option<AttendanceMonth>> {
        Ok(self
            .months
            .get(&(staff_name.to_string(), month_year.to_string()))
            .cloned())
    }
}
