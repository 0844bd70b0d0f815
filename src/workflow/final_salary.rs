//! Attendance-based final salary session.
//!
//! [`FinalSalaryWorkflow`] owns the draft being edited and the ledger of
//! finalized records. Finalizing re-checks the draft and is the only way a
//! record enters the ledger.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{FinalSalaryInput, calculate_final_salary, strip_whitespace};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{
    DraftField, FinalSalaryCalculation, FinalSalaryDraft, FinalSalaryEmployee, FinalSalaryFields,
    RecordId, Staff,
};

use super::ledger::FinalizationLedger;

/// A final salary session: one draft plus the finalized ledger.
///
/// # Example
///
/// ```
/// use salary_engine::config::EngineConfig;
/// use salary_engine::models::DraftField;
/// use salary_engine::workflow::FinalSalaryWorkflow;
///
/// let mut workflow = FinalSalaryWorkflow::new(EngineConfig::default());
/// workflow.update_field(DraftField::Mobile, "98765 43210");
/// workflow.update_field(DraftField::PresentDays, "30");
///
/// let record = workflow.finalize().unwrap();
/// assert_eq!(record.name(), "Employee");
/// assert_eq!(record.mobile(), "9876543210");
/// assert_eq!(workflow.records().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FinalSalaryWorkflow {
    config: Arc<EngineConfig>,
    session_id: Uuid,
    draft: FinalSalaryDraft,
    ledger: FinalizationLedger,
}

impl FinalSalaryWorkflow {
    /// Starts a session with a default draft and an empty ledger.
    pub fn new(config: impl Into<Arc<EngineConfig>>) -> Self {
        let config = config.into();
        let workflow = Self {
            session_id: Uuid::new_v4(),
            draft: FinalSalaryDraft::from_settings(config.settings()),
            ledger: FinalizationLedger::new(),
            config,
        };
        info!(session_id = %workflow.session_id, "Final salary session started");
        workflow
    }

    /// Correlation id attached to this session's log events.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The draft being edited.
    pub fn draft(&self) -> &FinalSalaryDraft {
        &self.draft
    }

    /// Replaces the text of one draft field.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Copies identity and salary components from a staff record.
    pub fn prefill_from_staff(&mut self, staff: &Staff) {
        self.draft.prefill_from_staff(staff);
        debug!(session_id = %self.session_id, staff = %staff.name, "Draft prefilled from staff");
    }

    /// Recomputes the calculation for the current draft.
    pub fn calculation(&self) -> FinalSalaryCalculation {
        calculate_final_salary(&self.input())
    }

    /// Commits the draft into the ledger.
    ///
    /// Returns `None` and changes nothing when the draft is invalid. On
    /// success the new record is selected and the draft is reset.
    pub fn finalize(&mut self) -> Option<FinalSalaryEmployee> {
        let input = self.input();
        let calculation = calculate_final_salary(&input);
        if let Some(error) = calculation.error {
            warn!(
                session_id = %self.session_id,
                error = %error,
                "Finalize rejected"
            );
            return None;
        }

        let settings = self.config.settings();
        let name = match self.draft.name.trim() {
            "" => settings.default_employee_name.clone(),
            trimmed => trimmed.to_string(),
        };
        let fields = FinalSalaryFields {
            name,
            mobile: strip_whitespace(&self.draft.mobile),
            pf_number: self.draft.pf_number.trim().to_string(),
            esi_number: self.draft.esi_number.trim().to_string(),
            designation: self.draft.designation.clone(),
            basic: input.basic,
            da: input.da,
            other_allowance: input.other_allowance,
            present_days: input.present_days,
            paid_leave_days: input.paid_leave_days,
            weekly_off_days: input.weekly_off_days,
            total_days_in_month: input.total_days_in_month,
            salary_advance: input.salary_advance,
            pf_deduction: input.pf_deduction,
            esi_deduction: input.esi_deduction,
        };

        let record = self.ledger.commit(fields, Utc::now()).clone();
        self.draft = FinalSalaryDraft::from_settings(settings);

        info!(
            session_id = %self.session_id,
            record_id = %record.id(),
            net_pay = %calculation.net_pay.round_dp(2),
            "Final salary finalized"
        );
        Some(record)
    }

    /// Resets the draft and clears the selection.
    pub fn reset_draft(&mut self) {
        self.draft = FinalSalaryDraft::from_settings(self.config.settings());
        self.ledger.clear_selection();
    }

    /// Deletes a finalized record.
    pub fn delete(&mut self, id: RecordId) -> Option<FinalSalaryEmployee> {
        let removed = self.ledger.delete(id);
        if removed.is_some() {
            info!(session_id = %self.session_id, record_id = %id, "Final salary deleted");
        }
        removed
    }

    /// Returns a finalized record by id.
    pub fn lookup(&self, id: RecordId) -> Option<&FinalSalaryEmployee> {
        self.ledger.lookup(id)
    }

    /// Selects a finalized record.
    pub fn select(&mut self, id: RecordId) -> EngineResult<()> {
        self.ledger.select(id)
    }

    /// The selected record.
    pub fn selected(&self) -> Option<&FinalSalaryEmployee> {
        self.ledger.selected()
    }

    /// Finalized records, most recent first.
    pub fn records(&self) -> &[FinalSalaryEmployee] {
        self.ledger.records()
    }

    /// The underlying ledger.
    pub fn ledger(&self) -> &FinalizationLedger {
        &self.ledger
    }

    fn input(&self) -> FinalSalaryInput {
        FinalSalaryInput::from_draft(&self.draft, self.config.settings())
    }
}
