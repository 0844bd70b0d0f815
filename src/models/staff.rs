//! Staff master record.
//!
//! Staff records come from an external staff source and are read-only to the
//! engine; they are only used to prefill a final salary draft.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::is_valid_mobile;
use crate::error::{EngineError, EngineResult};

use super::HotelDesignation;

/// A staff member as held by the external staff source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Full name.
    pub name: String,
    /// Mobile number (may be empty).
    pub mobile: String,
    /// Designation display name, one of [`HotelDesignation`].
    pub designation: String,
    /// Basic salary.
    pub basic: Decimal,
    /// Dearness allowance.
    pub da: Decimal,
    /// Other allowance.
    #[serde(alias = "otherAllowance")]
    pub other_allowance: Decimal,
}

impl Staff {
    /// Checks a staff record before it is added to a staff source.
    ///
    /// Name and designation are required, the designation must be part of
    /// the hotel catalogue, salary components must not be negative, and a
    /// mobile number, when given, must be ten digits.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::Staff;
    /// use rust_decimal::Decimal;
    ///
    /// let staff = Staff {
    ///     name: "".to_string(),
    ///     mobile: "".to_string(),
    ///     designation: "Driver".to_string(),
    ///     basic: Decimal::ZERO,
    ///     da: Decimal::new(8419, 0),
    ///     other_allowance: Decimal::ZERO,
    /// };
    /// assert!(staff.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "Name is required"));
        }
        if self.designation.trim().is_empty() {
            return Err(invalid("designation", "Designation is required"));
        }
        self.designation_kind()?;
        if self.basic < Decimal::ZERO || self.other_allowance < Decimal::ZERO {
            return Err(invalid("basic", "Salary components cannot be negative"));
        }
        if !self.mobile.trim().is_empty() && !is_valid_mobile(&self.mobile) {
            return Err(invalid("mobile", "Mobile number must be 10 digits"));
        }
        Ok(())
    }

    /// Resolves the designation text against the hotel catalogue.
    pub fn designation_kind(&self) -> EngineResult<HotelDesignation> {
        self.designation.parse()
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidStaff {
        field: field.to_string(),
        message: message.to_string(),
    }
}
