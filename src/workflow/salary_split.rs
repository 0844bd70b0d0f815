//! Zone-scoped gross-salary split session.
//!
//! [`SalarySplitWorkflow`] owns one [`ZoneState`] per zone and applies
//! operator edits to the selected zone only. After every edit it re-applies
//! auto-apply, and [`SalarySplitWorkflow::calculation`] recomputes the split
//! from scratch.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{GrossSplitInput, calculate_gross_split, lookup_basic_config, parse_amount};
use crate::config::{EngineConfig, EngineSettings};
use crate::models::{CalculationMode, GrossSplitResult, HotelDesignation, Zone, ZoneState};

/// Value written by a designation auto-fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoFillValue {
    /// A flat Basic amount (manual mode).
    BasicAmount(Decimal),
    /// A Basic percentage (TN hotel rule mode).
    BasicPercentage(Decimal),
}

/// Message surfaced after a designation is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoFillNotice {
    /// The configured value was written into the zone.
    Applied {
        /// Zone the value was applied to.
        zone: Zone,
        /// Selected designation.
        designation: HotelDesignation,
        /// Value written.
        value: AutoFillValue,
    },
    /// No configuration exists for the pair in the current mode.
    NoConfiguration {
        /// Selected zone.
        zone: Zone,
        /// Selected designation.
        designation: HotelDesignation,
    },
}

impl fmt::Display for AutoFillNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoFillNotice::Applied {
                zone,
                designation,
                value: AutoFillValue::BasicAmount(amount),
            } => write!(
                f,
                "Basic auto-filled to ₹{} for {} in Zone {}",
                amount.normalize(),
                designation,
                zone
            ),
            AutoFillNotice::Applied {
                zone,
                designation,
                value: AutoFillValue::BasicPercentage(percentage),
            } => write!(
                f,
                "Basic percentage auto-filled to {}% for {} in Zone {}",
                percentage.normalize(),
                designation,
                zone
            ),
            AutoFillNotice::NoConfiguration { zone, designation } => write!(
                f,
                "No basic configuration available for {} in Zone {}",
                designation, zone
            ),
        }
    }
}

/// A gross-salary split session across the four zones.
///
/// # Example
///
/// ```
/// use salary_engine::config::EngineConfig;
/// use salary_engine::models::{HotelDesignation, Zone};
/// use salary_engine::workflow::SalarySplitWorkflow;
///
/// let mut workflow = SalarySplitWorkflow::new(EngineConfig::default());
/// workflow.select_zone(Zone::B);
/// workflow.select_designation(Some(HotelDesignation::Waiter));
///
/// assert_eq!(workflow.current_state().basic, "1800");
/// assert!(!workflow.current_state().auto_apply_basic);
/// ```
#[derive(Debug, Clone)]
pub struct SalarySplitWorkflow {
    config: Arc<EngineConfig>,
    session_id: Uuid,
    selected_zone: Zone,
    zones: [ZoneState; 4],
    notice: Option<AutoFillNotice>,
}

impl SalarySplitWorkflow {
    /// Starts a session with every zone at its default state and Zone A
    /// selected.
    pub fn new(config: impl Into<Arc<EngineConfig>>) -> Self {
        let config = config.into();
        let mut fresh = ZoneState::from_settings(config.settings());
        apply_auto_basic(&mut fresh, config.settings());

        let workflow = Self {
            session_id: Uuid::new_v4(),
            selected_zone: Zone::A,
            zones: [fresh.clone(), fresh.clone(), fresh.clone(), fresh],
            notice: None,
            config,
        };
        info!(session_id = %workflow.session_id, "Salary split session started");
        workflow
    }

    /// Correlation id attached to this session's log events.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The zone edits currently apply to.
    pub fn selected_zone(&self) -> Zone {
        self.selected_zone
    }

    /// Stored state of any zone.
    pub fn zone_state(&self, zone: Zone) -> &ZoneState {
        &self.zones[slot(zone)]
    }

    /// Stored state of the selected zone.
    pub fn current_state(&self) -> &ZoneState {
        self.zone_state(self.selected_zone)
    }

    /// The latest auto-fill notice, if any.
    pub fn notice(&self) -> Option<&AutoFillNotice> {
        self.notice.as_ref()
    }

    /// Recomputes the split for the selected zone.
    pub fn calculation(&self) -> GrossSplitResult {
        let input = GrossSplitInput::from_zone_state(self.current_state(), self.config.settings());
        calculate_gross_split(&input)
    }

    /// Switches the selected zone. Other zones are left untouched.
    pub fn select_zone(&mut self, zone: Zone) {
        self.selected_zone = zone;
        self.notice = None;
        self.reconcile();
        debug!(session_id = %self.session_id, zone = %zone, "Zone selected");
    }

    /// Switches the calculation mode of the selected zone.
    pub fn set_mode(&mut self, mode: CalculationMode) {
        self.current_mut().mode = mode;
        self.notice = None;
        self.reconcile();
        debug!(
            session_id = %self.session_id,
            zone = %self.selected_zone,
            mode = mode.as_str(),
            "Calculation mode changed"
        );
    }

    /// Edits the gross salary of the selected zone.
    ///
    /// Ignored unless the gross salary policy is editable.
    pub fn update_gross_salary(&mut self, value: impl Into<String>) {
        if !self.config.settings().gross_is_editable() {
            debug!(
                session_id = %self.session_id,
                zone = %self.selected_zone,
                "Gross salary is fixed; edit ignored"
            );
            return;
        }
        self.current_mut().gross_salary = value.into();
        self.reconcile();
    }

    /// Edits Basic directly, which disables auto-apply for the zone.
    pub fn update_basic(&mut self, value: impl Into<String>) {
        let state = self.current_mut();
        state.basic = value.into();
        state.auto_apply_basic = false;
    }

    /// DA is fixed; edits are always ignored.
    pub fn update_da(&mut self, _value: impl Into<String>) {
        debug!(
            session_id = %self.session_id,
            zone = %self.selected_zone,
            "DA is fixed; edit ignored"
        );
    }

    /// Sets the TN hotel rule percentage, clamped to `[0, 100]`.
    pub fn update_tn_basic_percentage(&mut self, percentage: Decimal) {
        self.current_mut().tn_basic_percentage =
            percentage.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        self.reconcile();
    }

    /// Selects or clears the designation of the selected zone.
    ///
    /// A configured value for the current mode is written into the zone and
    /// disables auto-apply. Without one, nothing changes except the notice.
    pub fn select_designation(&mut self, designation: Option<HotelDesignation>) {
        let zone = self.selected_zone;
        self.current_mut().selected_designation = designation;

        let Some(designation) = designation else {
            self.notice = None;
            self.reconcile();
            return;
        };

        let mode = self.current_state().mode;
        let config = lookup_basic_config(self.config.designations(), zone, designation).copied();
        let value = config.and_then(|c| match mode {
            CalculationMode::Manual => c.manual_basic_amount.map(AutoFillValue::BasicAmount),
            CalculationMode::TnHotelRule => {
                c.tn_basic_percentage.map(AutoFillValue::BasicPercentage)
            }
        });

        let notice = match value {
            Some(value) => {
                let state = self.current_mut();
                match value {
                    AutoFillValue::BasicAmount(amount) => {
                        state.basic = amount.normalize().to_string();
                    }
                    AutoFillValue::BasicPercentage(percentage) => {
                        state.tn_basic_percentage = percentage;
                    }
                }
                state.auto_apply_basic = false;
                info!(
                    session_id = %self.session_id,
                    zone = %zone,
                    designation = %designation,
                    mode = mode.as_str(),
                    "Designation auto-fill applied"
                );
                AutoFillNotice::Applied {
                    zone,
                    designation,
                    value,
                }
            }
            None => {
                info!(
                    session_id = %self.session_id,
                    zone = %zone,
                    designation = %designation,
                    mode = mode.as_str(),
                    "No designation configuration"
                );
                AutoFillNotice::NoConfiguration { zone, designation }
            }
        };

        self.notice = Some(notice);
        self.reconcile();
    }

    /// Flips auto-apply for the selected zone.
    pub fn toggle_auto_apply_basic(&mut self) {
        let state = self.current_mut();
        state.auto_apply_basic = !state.auto_apply_basic;
        self.reconcile();
    }

    /// Restores the selected zone to its default state.
    pub fn reset_zone(&mut self) {
        *self.current_mut() = ZoneState::from_settings(self.config.settings());
        self.notice = None;
        self.reconcile();
        debug!(session_id = %self.session_id, zone = %self.selected_zone, "Zone reset");
    }

    fn current_mut(&mut self) -> &mut ZoneState {
        &mut self.zones[slot(self.selected_zone)]
    }

    fn reconcile(&mut self) {
        let index = slot(self.selected_zone);
        apply_auto_basic(&mut self.zones[index], self.config.settings());
    }
}

fn slot(zone: Zone) -> usize {
    match zone {
        Zone::A => 0,
        Zone::B => 1,
        Zone::C => 2,
        Zone::D => 3,
    }
}

/// Forces Basic to the configured share of gross while auto-apply is on in
/// manual mode.
fn apply_auto_basic(state: &mut ZoneState, settings: &EngineSettings) {
    if state.mode != CalculationMode::Manual || !state.auto_apply_basic {
        return;
    }
    let gross = parse_amount(&state.gross_salary);
    if gross <= Decimal::ZERO {
        return;
    }
    let Some(basic) = gross.checked_mul(settings.auto_apply_basic_ratio) else {
        return;
    };
    let mut basic = basic.round_dp(2);
    basic.rescale(2);
    state.basic = basic.to_string();
}
