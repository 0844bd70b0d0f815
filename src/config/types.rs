//! Configuration types for the Salary Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::builtin_designation_table;
use crate::error::{EngineError, EngineResult};
use crate::models::{HotelDesignation, Zone};

/// Whether the operator may edit the gross salary of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrossSalaryPolicy {
    /// Gross salary is pinned to `default_gross_salary`; edits are ignored.
    #[default]
    Fixed,
    /// Each zone's gross salary may be edited.
    Editable,
}

/// Engine-wide settings, loaded from `engine.yaml`.
///
/// Every field has a default, so a settings file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// The fixed dearness allowance applied in every zone and mode.
    pub fixed_da: Decimal,
    /// The gross salary each zone starts with.
    pub default_gross_salary: Decimal,
    /// Whether gross salary is fixed or editable per zone.
    pub gross_salary_policy: GrossSalaryPolicy,
    /// Basic percentage each zone starts with in TN hotel rule mode.
    pub default_tn_basic_percentage: Decimal,
    /// Share of gross that auto-apply writes into Basic.
    pub auto_apply_basic_ratio: Decimal,
    /// Whether auto-apply starts enabled for a fresh zone.
    pub auto_apply_enabled_by_default: bool,
    /// Days in month used by a fresh draft and when the field is blank.
    pub default_total_days: Decimal,
    /// Calling code prefixed to chat links.
    pub country_calling_code: String,
    /// Base URL of the chat deep link; the number is appended directly.
    pub chat_link_base: String,
    /// Name recorded when a draft is finalized without one.
    pub default_employee_name: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            fixed_da: Decimal::new(8419, 0),
            default_gross_salary: Decimal::new(8419, 0),
            gross_salary_policy: GrossSalaryPolicy::Fixed,
            default_tn_basic_percentage: Decimal::new(50, 0),
            auto_apply_basic_ratio: Decimal::new(5, 1),
            auto_apply_enabled_by_default: true,
            default_total_days: Decimal::new(30, 0),
            country_calling_code: "91".to_string(),
            chat_link_base: "https://wa.me/".to_string(),
            default_employee_name: "Employee".to_string(),
        }
    }
}

impl EngineSettings {
    /// Checks that every setting is within its allowed range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.fixed_da <= Decimal::ZERO {
            return Err(invalid("fixed_da", "must be greater than zero"));
        }
        if self.default_gross_salary <= Decimal::ZERO {
            return Err(invalid("default_gross_salary", "must be greater than zero"));
        }
        if !is_percentage(self.default_tn_basic_percentage) {
            return Err(invalid(
                "default_tn_basic_percentage",
                "must be between 0 and 100",
            ));
        }
        if self.auto_apply_basic_ratio < Decimal::ZERO || self.auto_apply_basic_ratio > Decimal::ONE
        {
            return Err(invalid("auto_apply_basic_ratio", "must be between 0 and 1"));
        }
        if self.default_total_days <= Decimal::ZERO {
            return Err(invalid("default_total_days", "must be greater than zero"));
        }
        if self.country_calling_code.is_empty()
            || !self.country_calling_code.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("country_calling_code", "must contain only digits"));
        }
        if self.chat_link_base.trim().is_empty() {
            return Err(invalid("chat_link_base", "must not be empty"));
        }
        Ok(())
    }

    /// Returns true if operators may edit gross salary.
    pub fn gross_is_editable(&self) -> bool {
        self.gross_salary_policy == GrossSalaryPolicy::Editable
    }
}

/// Default Basic configuration for one (zone, designation) pair.
///
/// Each field feeds one calculation mode; a missing field means no auto-fill
/// is available in that mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesignationBasicConfig {
    /// Flat Basic amount used in manual mode.
    pub manual_basic_amount: Option<Decimal>,
    /// Basic percentage used in TN hotel rule mode.
    pub tn_basic_percentage: Option<Decimal>,
}

/// A single row of `designations.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignationBasicEntry {
    /// The zone this row applies to.
    pub zone: Zone,
    /// The designation this row applies to.
    pub designation: HotelDesignation,
    /// Flat Basic amount used in manual mode.
    #[serde(default)]
    pub manual_basic_amount: Option<Decimal>,
    /// Basic percentage used in TN hotel rule mode.
    #[serde(default)]
    pub tn_basic_percentage: Option<Decimal>,
}

/// Designations configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DesignationsConfig {
    /// The configured rows.
    pub designations: Vec<DesignationBasicEntry>,
}

/// Lookup table from (zone, designation) to default Basic configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignationTable {
    entries: HashMap<(Zone, HotelDesignation), DesignationBasicConfig>,
}

impl DesignationTable {
    /// Builds a table from configuration rows.
    ///
    /// Rejects duplicate pairs, negative amounts and percentages outside
    /// `[0, 100]`.
    pub fn from_entries(rows: Vec<DesignationBasicEntry>) -> EngineResult<Self> {
        let mut entries = HashMap::with_capacity(rows.len());

        for row in rows {
            if row.manual_basic_amount.is_some_and(|a| a < Decimal::ZERO) {
                return Err(invalid(
                    "manual_basic_amount",
                    &format!(
                        "negative amount for {} in Zone {}",
                        row.designation, row.zone
                    ),
                ));
            }
            if row.tn_basic_percentage.is_some_and(|p| !is_percentage(p)) {
                return Err(invalid(
                    "tn_basic_percentage",
                    &format!(
                        "percentage out of range for {} in Zone {}",
                        row.designation, row.zone
                    ),
                ));
            }

            let config = DesignationBasicConfig {
                manual_basic_amount: row.manual_basic_amount,
                tn_basic_percentage: row.tn_basic_percentage,
            };
            if entries.insert((row.zone, row.designation), config).is_some() {
                return Err(invalid(
                    "designations",
                    &format!(
                        "duplicate entry for {} in Zone {}",
                        row.designation, row.zone
                    ),
                ));
            }
        }

        Ok(Self { entries })
    }

    /// Returns the configuration for a pair, if one exists.
    pub fn get(&self, zone: Zone, designation: HotelDesignation) -> Option<&DesignationBasicConfig> {
        self.entries.get(&(zone, designation))
    }

    /// Number of configured pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no pair is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<((Zone, HotelDesignation), DesignationBasicConfig)> for DesignationTable {
    /// Collects pairs without validation; later pairs replace earlier ones.
    fn from_iter<I: IntoIterator<Item = ((Zone, HotelDesignation), DesignationBasicConfig)>>(
        iter: I,
    ) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The complete engine configuration: settings plus designation table.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    settings: EngineSettings,
    designations: DesignationTable,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(settings: EngineSettings, designations: DesignationTable) -> Self {
        Self {
            settings,
            designations,
        }
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the designation table.
    pub fn designations(&self) -> &DesignationTable {
        &self.designations
    }
}

impl Default for EngineConfig {
    /// Default settings with the built-in designation table.
    fn default() -> Self {
        Self::new(EngineSettings::default(), builtin_designation_table().clone())
    }
}

fn is_percentage(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
