//! Operator sessions for the Salary Engine.
//!
//! A session owns mutable state (zone inputs, the final salary draft, the
//! ledger) and recomputes the pure calculators after every edit. Sessions
//! are single-operator and hold no locks.

mod final_salary;
mod ledger;
mod salary_split;

pub use final_salary::FinalSalaryWorkflow;
pub use ledger::FinalizationLedger;
pub use salary_split::{AutoFillNotice, AutoFillValue, SalarySplitWorkflow};
