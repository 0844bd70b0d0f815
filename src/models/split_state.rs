//! Zone-scoped gross-salary split state.
//!
//! This module defines [`ZoneState`], the editable inputs of the
//! gross-salary-split calculator for a single zone, and [`CalculationMode`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineSettings;

use super::HotelDesignation;

/// How Basic is derived from the gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Basic is a flat amount entered by the operator.
    #[default]
    Manual,
    /// Basic is a configurable percentage of gross (Tamil Nadu hotel rule).
    TnHotelRule,
}

impl CalculationMode {
    /// Returns the snake_case name used in logs and audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMode::Manual => "manual",
            CalculationMode::TnHotelRule => "tn_hotel_rule",
        }
    }
}

/// Editable inputs for the gross-salary split in one zone.
///
/// Amount fields hold the raw operator text and are parsed on every
/// recomputation. `da` always mirrors the configured fixed allowance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneState {
    /// Gross salary as entered (fixed to the configured default unless the
    /// gross salary policy is editable).
    pub gross_salary: String,
    /// Basic amount as entered, used in [`CalculationMode::Manual`].
    pub basic: String,
    /// Dearness allowance, never editable.
    pub da: String,
    /// Active calculation mode for this zone.
    pub mode: CalculationMode,
    /// Basic percentage in `[0, 100]`, used in [`CalculationMode::TnHotelRule`].
    pub tn_basic_percentage: Decimal,
    /// Designation last selected for auto-fill, if any.
    pub selected_designation: Option<HotelDesignation>,
    /// When set in manual mode, Basic is continuously forced to the
    /// configured share of gross.
    pub auto_apply_basic: bool,
}

impl ZoneState {
    /// Creates the default state for a zone from engine settings.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::config::EngineSettings;
    /// use salary_engine::models::{CalculationMode, ZoneState};
    ///
    /// let state = ZoneState::from_settings(&EngineSettings::default());
    /// assert_eq!(state.gross_salary, "8419");
    /// assert_eq!(state.da, "8419");
    /// assert_eq!(state.basic, "");
    /// assert_eq!(state.mode, CalculationMode::Manual);
    /// assert!(state.auto_apply_basic);
    /// ```
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self {
            gross_salary: settings.default_gross_salary.normalize().to_string(),
            basic: String::new(),
            da: settings.fixed_da.normalize().to_string(),
            mode: CalculationMode::Manual,
            tn_basic_percentage: settings.default_tn_basic_percentage,
            selected_designation: None,
            auto_apply_basic: settings.auto_apply_enabled_by_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_state_uses_settings() {
        let mut settings = EngineSettings::default();
        settings.default_gross_salary = dec("20000.00");
        settings.default_tn_basic_percentage = dec("40");
        settings.auto_apply_enabled_by_default = false;

        let state = ZoneState::from_settings(&settings);

        assert_eq!(state.gross_salary, "20000");
        assert_eq!(state.tn_basic_percentage, dec("40"));
        assert!(!state.auto_apply_basic);
        assert!(state.selected_designation.is_none());
    }

    #[test]
    fn test_calculation_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&CalculationMode::TnHotelRule).unwrap(),
            "\"tn_hotel_rule\""
        );
        let mode: CalculationMode = serde_json::from_str("\"manual\"").unwrap();
        assert_eq!(mode, CalculationMode::Manual);
    }

    #[test]
    fn test_zone_state_round_trips_through_json() {
        let mut state = ZoneState::from_settings(&EngineSettings::default());
        state.selected_designation = Some(HotelDesignation::Receptionist);

        let json = serde_json::to_string(&state).unwrap();
        let back: ZoneState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
