//! Designation Basic lookup.
//!
//! This module provides the built-in (zone, designation) table of default
//! Basic configuration and the pure lookup over any [`DesignationTable`].

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::config::{DesignationBasicConfig, DesignationTable};
use crate::models::{HotelDesignation, Zone};

/// Built-in rows: zone, designation, manual Basic in paise, TN percentage in
/// hundredths of a percent.
const BUILTIN_ROWS: &[(Zone, HotelDesignation, Option<i64>, Option<i64>)] = &[
    (Zone::A, HotelDesignation::GeneralManager, Some(420950), Some(5000)),
    (Zone::A, HotelDesignation::HotelManager, Some(400000), Some(4800)),
    (Zone::A, HotelDesignation::FrontOfficeManager, Some(380000), Some(4500)),
    (Zone::A, HotelDesignation::Receptionist, Some(250000), Some(3000)),
    (Zone::A, HotelDesignation::FrontDeskAgent, Some(240000), Some(3000)),
    (Zone::A, HotelDesignation::HousekeepingSupervisor, Some(300000), Some(3500)),
    (Zone::A, HotelDesignation::RoomAttendant, Some(210000), Some(2500)),
    (Zone::A, HotelDesignation::Waiter, Some(200000), Some(2500)),
    (Zone::A, HotelDesignation::Steward, Some(200000), None),
    (Zone::A, HotelDesignation::ExecutiveChef, Some(400000), Some(4800)),
    (Zone::A, HotelDesignation::SousChef, Some(350000), Some(4200)),
    (Zone::A, HotelDesignation::KitchenHelper, Some(180000), None),
    (Zone::A, HotelDesignation::Accountant, Some(320000), Some(4000)),
    (Zone::A, HotelDesignation::Cashier, Some(240000), Some(3000)),
    (Zone::A, HotelDesignation::Electrician, Some(260000), Some(3200)),
    (Zone::A, HotelDesignation::SecurityGuard, None, Some(2000)),
    (Zone::A, HotelDesignation::Driver, Some(220000), None),
    (Zone::B, HotelDesignation::GeneralManager, Some(378850), Some(4800)),
    (Zone::B, HotelDesignation::HotelManager, Some(360000), Some(4600)),
    (Zone::B, HotelDesignation::FrontOfficeManager, Some(342000), Some(4300)),
    (Zone::B, HotelDesignation::Receptionist, Some(225000), Some(2800)),
    (Zone::B, HotelDesignation::FrontDeskAgent, Some(216000), Some(2800)),
    (Zone::B, HotelDesignation::HousekeepingSupervisor, Some(270000), Some(3300)),
    (Zone::B, HotelDesignation::RoomAttendant, Some(189000), Some(2300)),
    (Zone::B, HotelDesignation::Waiter, Some(180000), Some(2300)),
    (Zone::B, HotelDesignation::Steward, Some(180000), None),
    (Zone::B, HotelDesignation::ExecutiveChef, Some(360000), Some(4600)),
    (Zone::B, HotelDesignation::SousChef, Some(315000), Some(4000)),
    (Zone::B, HotelDesignation::KitchenHelper, Some(162000), None),
    (Zone::B, HotelDesignation::Accountant, Some(288000), Some(3800)),
    (Zone::B, HotelDesignation::Cashier, Some(216000), Some(2800)),
    (Zone::B, HotelDesignation::Electrician, Some(234000), Some(3000)),
    (Zone::B, HotelDesignation::SecurityGuard, None, Some(1800)),
    (Zone::B, HotelDesignation::Driver, Some(198000), None),
    (Zone::C, HotelDesignation::GeneralManager, Some(336750), Some(4500)),
    (Zone::C, HotelDesignation::HotelManager, Some(320000), Some(4300)),
    (Zone::C, HotelDesignation::FrontOfficeManager, Some(304000), Some(4000)),
    (Zone::C, HotelDesignation::Receptionist, Some(200000), Some(2500)),
    (Zone::C, HotelDesignation::FrontDeskAgent, Some(192000), Some(2500)),
    (Zone::C, HotelDesignation::HousekeepingSupervisor, Some(240000), Some(3000)),
    (Zone::C, HotelDesignation::RoomAttendant, Some(168000), Some(2000)),
    (Zone::C, HotelDesignation::Waiter, Some(160000), Some(2000)),
    (Zone::C, HotelDesignation::Steward, Some(160000), None),
    (Zone::C, HotelDesignation::ExecutiveChef, Some(320000), Some(4300)),
    (Zone::C, HotelDesignation::SousChef, Some(280000), Some(3700)),
    (Zone::C, HotelDesignation::KitchenHelper, Some(144000), None),
    (Zone::C, HotelDesignation::Accountant, Some(256000), Some(3500)),
    (Zone::C, HotelDesignation::Cashier, Some(192000), Some(2500)),
    (Zone::C, HotelDesignation::Electrician, Some(208000), Some(2700)),
    (Zone::C, HotelDesignation::SecurityGuard, None, Some(1500)),
    (Zone::C, HotelDesignation::Driver, Some(176000), None),
    (Zone::D, HotelDesignation::GeneralManager, Some(294650), Some(4500)),
    (Zone::D, HotelDesignation::HotelManager, Some(280000), Some(4300)),
    (Zone::D, HotelDesignation::FrontOfficeManager, Some(266000), Some(4000)),
    (Zone::D, HotelDesignation::Receptionist, Some(175000), Some(2500)),
    (Zone::D, HotelDesignation::FrontDeskAgent, Some(168000), Some(2500)),
    (Zone::D, HotelDesignation::HousekeepingSupervisor, Some(210000), Some(3000)),
    (Zone::D, HotelDesignation::RoomAttendant, Some(147000), Some(2000)),
    (Zone::D, HotelDesignation::Waiter, Some(140000), Some(2000)),
    (Zone::D, HotelDesignation::Steward, Some(140000), None),
    (Zone::D, HotelDesignation::ExecutiveChef, Some(280000), Some(4300)),
    (Zone::D, HotelDesignation::SousChef, Some(245000), Some(3700)),
    (Zone::D, HotelDesignation::KitchenHelper, Some(126000), None),
    (Zone::D, HotelDesignation::Accountant, Some(224000), Some(3500)),
    (Zone::D, HotelDesignation::Cashier, Some(168000), Some(2500)),
    (Zone::D, HotelDesignation::Electrician, Some(182000), Some(2700)),
    (Zone::D, HotelDesignation::SecurityGuard, None, Some(1500)),
    (Zone::D, HotelDesignation::Driver, Some(154000), None),
];

static BUILTIN_TABLE: LazyLock<DesignationTable> = LazyLock::new(|| {
    BUILTIN_ROWS
        .iter()
        .map(|&(zone, designation, amount, percentage)| {
            (
                (zone, designation),
                DesignationBasicConfig {
                    manual_basic_amount: amount.map(|paise| Decimal::new(paise, 2)),
                    tn_basic_percentage: percentage.map(|hundredths| Decimal::new(hundredths, 2)),
                },
            )
        })
        .collect()
});

/// Returns the built-in designation table.
pub fn builtin_designation_table() -> &'static DesignationTable {
    &BUILTIN_TABLE
}

/// Looks up the default Basic configuration for a zone and designation.
///
/// Absence is an expected outcome and means no auto-fill is available.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{builtin_designation_table, lookup_basic_config};
/// use salary_engine::models::{HotelDesignation, Zone};
/// use rust_decimal::Decimal;
///
/// let table = builtin_designation_table();
/// let config = lookup_basic_config(table, Zone::A, HotelDesignation::Waiter).unwrap();
/// assert_eq!(config.manual_basic_amount, Some(Decimal::new(2000, 0)));
///
/// assert!(lookup_basic_config(table, Zone::A, HotelDesignation::Sommelier).is_none());
/// ```
pub fn lookup_basic_config(
    table: &DesignationTable,
    zone: Zone,
    designation: HotelDesignation,
) -> Option<&DesignationBasicConfig> {
    table.get(zone, designation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DesignationBasicEntry;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_builtin_rows_pass_table_validation() {
        let rows: Vec<DesignationBasicEntry> = BUILTIN_ROWS
            .iter()
            .map(|&(zone, designation, amount, percentage)| DesignationBasicEntry {
                zone,
                designation,
                manual_basic_amount: amount.map(|a| Decimal::new(a, 2)),
                tn_basic_percentage: percentage.map(|p| Decimal::new(p, 2)),
            })
            .collect();

        let validated = DesignationTable::from_entries(rows).unwrap();
        assert_eq!(&validated, builtin_designation_table());
    }

    #[test]
    fn test_every_zone_has_entries() {
        let table = builtin_designation_table();
        for zone in Zone::ALL {
            assert!(lookup_basic_config(table, zone, HotelDesignation::Receptionist).is_some());
        }
    }

    /// DL-001: zone A general manager carries both modes
    #[test]
    fn test_zone_a_general_manager() {
        let config = lookup_basic_config(
            builtin_designation_table(),
            Zone::A,
            HotelDesignation::GeneralManager,
        )
        .unwrap();

        assert_eq!(config.manual_basic_amount, Some(dec("4209.50")));
        assert_eq!(config.tn_basic_percentage, Some(dec("50")));
    }

    /// DL-002: the same designation differs between zones
    #[test]
    fn test_zone_changes_amount() {
        let table = builtin_designation_table();
        let a = lookup_basic_config(table, Zone::A, HotelDesignation::Waiter).unwrap();
        let c = lookup_basic_config(table, Zone::C, HotelDesignation::Waiter).unwrap();

        assert_eq!(a.manual_basic_amount, Some(dec("2000")));
        assert_eq!(c.manual_basic_amount, Some(dec("1600")));
        assert_eq!(c.tn_basic_percentage, Some(dec("20")));
    }

    /// DL-003: partial configuration
    #[test]
    fn test_partial_configurations() {
        let table = builtin_designation_table();
        let guard = lookup_basic_config(table, Zone::B, HotelDesignation::SecurityGuard).unwrap();
        assert_eq!(guard.manual_basic_amount, None);
        assert_eq!(guard.tn_basic_percentage, Some(dec("18")));

        let driver = lookup_basic_config(table, Zone::D, HotelDesignation::Driver).unwrap();
        assert_eq!(driver.manual_basic_amount, Some(dec("1540")));
        assert_eq!(driver.tn_basic_percentage, None);
    }

    /// DL-004: unconfigured pair is absent
    #[test]
    fn test_unconfigured_pair_is_none() {
        assert!(
            lookup_basic_config(builtin_designation_table(), Zone::B, HotelDesignation::Gardener)
                .is_none()
        );
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let table = builtin_designation_table();
        let first = lookup_basic_config(table, Zone::D, HotelDesignation::Cashier).copied();
        let second = lookup_basic_config(table, Zone::D, HotelDesignation::Cashier).copied();
        assert_eq!(first, second);
    }
}
