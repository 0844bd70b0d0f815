//! In-memory ledger of finalized pay records.

use chrono::{DateTime, Utc};

use crate::error::{EngineError, EngineResult};
use crate::models::{FinalSalaryEmployee, FinalSalaryFields, RecordId};

/// Ordered collection of finalized records, most recent first.
///
/// Ids come from a counter owned by the ledger. They start at 1, increase
/// with every commit and are never reused, even after a deletion.
#[derive(Debug, Clone)]
pub struct FinalizationLedger {
    records: Vec<FinalSalaryEmployee>,
    next_id: u64,
    selected: Option<RecordId>,
}

impl Default for FinalizationLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl FinalizationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            selected: None,
        }
    }

    /// Creates a record from `fields`, places it first and selects it.
    pub fn commit(
        &mut self,
        fields: FinalSalaryFields,
        created_at: DateTime<Utc>,
    ) -> &FinalSalaryEmployee {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        self.records
            .insert(0, FinalSalaryEmployee::new(id, fields, created_at));
        self.selected = Some(id);
        &self.records[0]
    }

    /// Removes a record, clearing the selection if it pointed at it.
    pub fn delete(&mut self, id: RecordId) -> Option<FinalSalaryEmployee> {
        let position = self.records.iter().position(|r| r.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.records.remove(position))
    }

    /// Returns the record with the given id.
    pub fn lookup(&self, id: RecordId) -> Option<&FinalSalaryEmployee> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Selects an existing record.
    pub fn select(&mut self, id: RecordId) -> EngineResult<()> {
        if self.lookup(id).is_none() {
            return Err(EngineError::RecordNotFound { id: id.0 });
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Id of the selected record.
    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected
    }

    /// The selected record.
    pub fn selected(&self) -> Option<&FinalSalaryEmployee> {
        self.selected.and_then(|id| self.lookup(id))
    }

    /// All records, most recent first.
    pub fn records(&self) -> &[FinalSalaryEmployee] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn create_test_fields(name: &str) -> FinalSalaryFields {
        FinalSalaryFields {
            name: name.to_string(),
            mobile: "9876543210".to_string(),
            pf_number: String::new(),
            esi_number: String::new(),
            designation: "Waiter".to_string(),
            basic: Decimal::new(1000, 0),
            da: Decimal::new(8419, 0),
            other_allowance: Decimal::new(581, 0),
            present_days: Decimal::new(26, 0),
            paid_leave_days: Decimal::ZERO,
            weekly_off_days: Decimal::new(4, 0),
            total_days_in_month: Decimal::new(30, 0),
            salary_advance: Decimal::ZERO,
            pf_deduction: Decimal::ZERO,
            esi_deduction: Decimal::ZERO,
        }
    }

    fn create_test_ledger(names: &[&str]) -> FinalizationLedger {
        let mut ledger = FinalizationLedger::new();
        for name in names {
            ledger.commit(create_test_fields(name), Utc::now());
        }
        ledger
    }

    #[test]
    fn test_commit_assigns_increasing_ids_most_recent_first() {
        let ledger = create_test_ledger(&["Asha", "Bala", "Chitra"]);

        let ids: Vec<u64> = ledger.records().iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(ledger.records()[0].name(), "Chitra");
        assert_eq!(ledger.selected_id(), Some(RecordId(3)));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut ledger = create_test_ledger(&["Asha", "Bala"]);
        ledger.delete(RecordId(2));

        let record = ledger.commit(create_test_fields("Chitra"), Utc::now());
        assert_eq!(record.id(), RecordId(3));
    }

    #[test]
    fn test_delete_removes_exactly_one_record() {
        let mut ledger = create_test_ledger(&["Asha", "Bala", "Chitra"]);

        let removed = ledger.delete(RecordId(2)).unwrap();

        assert_eq!(removed.name(), "Bala");
        assert_eq!(ledger.len(), 2);
        assert!(ledger.lookup(RecordId(2)).is_none());
        assert!(ledger.lookup(RecordId(1)).is_some());
        assert!(ledger.lookup(RecordId(3)).is_some());
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut ledger = create_test_ledger(&["Asha", "Bala"]);
        assert_eq!(ledger.selected_id(), Some(RecordId(2)));

        ledger.delete(RecordId(2));
        assert_eq!(ledger.selected_id(), None);
    }

    #[test]
    fn test_delete_unselected_keeps_selection() {
        let mut ledger = create_test_ledger(&["Asha", "Bala"]);

        ledger.delete(RecordId(1));
        assert_eq!(ledger.selected_id(), Some(RecordId(2)));
        assert_eq!(ledger.selected().unwrap().name(), "Bala");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut ledger = create_test_ledger(&["Asha"]);
        assert!(ledger.delete(RecordId(42)).is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_select_unknown_id_fails() {
        let mut ledger = create_test_ledger(&["Asha"]);

        match ledger.select(RecordId(9)) {
            Err(EngineError::RecordNotFound { id }) => assert_eq!(id, 9),
            other => panic!("Expected RecordNotFound, got {:?}", other),
        }
        assert_eq!(ledger.selected_id(), Some(RecordId(1)));
    }

    #[test]
    fn test_select_and_clear() {
        let mut ledger = create_test_ledger(&["Asha", "Bala"]);

        ledger.select(RecordId(1)).unwrap();
        assert_eq!(ledger.selected().unwrap().name(), "Asha");

        ledger.clear_selection();
        assert!(ledger.selected().is_none());
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = FinalizationLedger::default();
        assert!(ledger.is_empty());
        assert!(ledger.selected().is_none());
    }
}
