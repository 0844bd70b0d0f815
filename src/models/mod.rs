//! Core data models for the Salary Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod designation;
mod draft;
mod final_salary;
mod split_state;
mod staff;
mod zone;

pub use calculation_result::{
    AuditStep, FinalSalaryCalculation, FinalSalaryValidationError, GrossSplitResult,
    SplitValidationError,
};
pub use designation::HotelDesignation;
pub use draft::{DraftField, FinalSalaryDraft};
pub use final_salary::{FinalSalaryEmployee, FinalSalaryFields, PaySummary, RecordId};
pub use split_state::{CalculationMode, ZoneState};
pub use staff::Staff;
pub use zone::Zone;
