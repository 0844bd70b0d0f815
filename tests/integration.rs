//! End-to-end tests for the Salary Engine.
//!
//! This test suite drives the public API the way an embedding application
//! would:
//! - Loading the shipped Tamil Nadu hotel configuration
//! - Gross-salary split sessions across zones
//! - Attendance-based final salary and finalization
//! - Statement and deep-link rendering
//! - Staff prefill and attendance persistence through collaborators

use rust_decimal::Decimal;
use std::str::FromStr;

use salary_engine::config::{ConfigLoader, EngineConfig, GrossSalaryPolicy};
use salary_engine::error::EngineError;
use salary_engine::external::{
    AttendanceMonth, AttendanceStore, InMemoryAttendanceStore, StaffDirectory, StaffSource,
};
use salary_engine::message::{OutboundMessage, render_statement};
use salary_engine::models::{
    CalculationMode, DraftField, FinalSalaryValidationError, HotelDesignation, RecordId,
    SplitValidationError, Staff, Zone,
};
use salary_engine::workflow::{AutoFillNotice, FinalSalaryWorkflow, SalarySplitWorkflow};

// =============================================================================
// Test Helpers
// =============================================================================

fn load_tn_hotel_config() -> EngineConfig {
    ConfigLoader::load("./config/tn_hotel")
        .expect("Failed to load config")
        .into_config()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn fill_draft(workflow: &mut FinalSalaryWorkflow, values: &[(DraftField, &str)]) {
    for (field, value) in values {
        workflow.update_field(*field, *value);
    }
}

fn standard_attendance() -> Vec<(DraftField, &'static str)> {
    vec![
        (DraftField::Name, "Ravi Kumar"),
        (DraftField::Mobile, "98765 43210"),
        (DraftField::PfNumber, "TN/PF/123"),
        (DraftField::Designation, "Waiter"),
        (DraftField::Basic, "1000"),
        (DraftField::Da, "8419"),
        (DraftField::OtherAllowance, "581"),
        (DraftField::PresentDays, "20"),
        (DraftField::PaidLeaveDays, "2"),
        (DraftField::WeeklyOffDays, "4"),
        (DraftField::TotalDaysInMonth, "30"),
        (DraftField::SalaryAdvance, "500"),
        (DraftField::PfDeduction, "300"),
        (DraftField::EsiDeduction, "100"),
    ]
}

fn create_staff(name: &str, mobile: &str, designation: &str, basic: &str) -> Staff {
    Staff {
        name: name.to_string(),
        mobile: mobile.to_string(),
        designation: designation.to_string(),
        basic: decimal(basic),
        da: decimal("8419"),
        other_allowance: decimal("500"),
    }
}

// =============================================================================
// SECTION 1: Configuration
// =============================================================================

#[test]
fn test_shipped_config_matches_builtin_defaults() {
    let loaded = load_tn_hotel_config();
    let builtin = EngineConfig::default();

    assert_eq!(loaded.settings(), builtin.settings());
    assert_eq!(loaded.designations(), builtin.designations());
    assert_eq!(loaded.settings().gross_salary_policy, GrossSalaryPolicy::Fixed);
    assert_eq!(loaded.settings().fixed_da, decimal("8419"));
}

#[test]
fn test_shipped_config_designation_lookup() {
    let loader = ConfigLoader::load("./config/tn_hotel").unwrap();

    let waiter = loader
        .get_basic_config(Zone::B, HotelDesignation::Waiter)
        .unwrap();
    assert_eq!(waiter.manual_basic_amount, Some(decimal("1800")));
    assert_eq!(waiter.tn_basic_percentage, Some(decimal("23")));

    assert!(
        loader
            .get_basic_config(Zone::D, HotelDesignation::Gardener)
            .is_none()
    );
}

#[test]
fn test_missing_config_directory() {
    match ConfigLoader::load("./config/does_not_exist") {
        Err(EngineError::ConfigNotFound { path }) => assert!(path.ends_with("engine.yaml")),
        other => panic!("Expected ConfigNotFound, got {:?}", other),
    }
}

// =============================================================================
// SECTION 2: Gross-Salary Split
// =============================================================================

/// Half of the fixed gross plus the fixed DA exceeds gross.
#[test]
fn test_split_default_session_is_invalid() {
    let workflow = SalarySplitWorkflow::new(load_tn_hotel_config());

    let result = workflow.calculation();

    assert_eq!(result.gross_salary, decimal("8419"));
    assert_eq!(result.basic, decimal("4209.50"));
    assert_eq!(result.da, decimal("8419"));
    assert!(!result.is_valid);
    assert_eq!(result.error_message(), "Basic + DA cannot exceed Gross Salary");
}

#[test]
fn test_split_tn_rule_on_fixed_gross_is_invalid() {
    let mut workflow = SalarySplitWorkflow::new(load_tn_hotel_config());
    workflow.set_mode(CalculationMode::TnHotelRule);

    let result = workflow.calculation();
    assert_eq!(result.basic, decimal("4209.5"));
    assert_eq!(
        result.error,
        Some(SplitValidationError::BasicPlusDaExceedsGross)
    );
}

#[test]
fn test_split_zero_basic_is_valid_on_fixed_gross() {
    let mut workflow = SalarySplitWorkflow::new(load_tn_hotel_config());
    workflow.update_basic("0");

    let result = workflow.calculation();
    assert!(result.is_valid);
    assert_eq!(result.other, Decimal::ZERO);
}

#[test]
fn test_split_editable_gross_session() {
    let mut config = load_tn_hotel_config().settings().clone();
    config.gross_salary_policy = GrossSalaryPolicy::Editable;
    let config = EngineConfig::new(config, load_tn_hotel_config().designations().clone());

    let mut workflow = SalarySplitWorkflow::new(config);
    workflow.update_gross_salary("25000");
    workflow.select_designation(Some(HotelDesignation::Accountant));

    let result = workflow.calculation();
    assert!(result.is_valid);
    assert_eq!(result.basic, decimal("3200"));
    assert_eq!(result.other, decimal("13381"));
}

#[test]
fn test_split_zones_are_isolated() {
    let mut workflow = SalarySplitWorkflow::new(load_tn_hotel_config());

    workflow.select_zone(Zone::A);
    workflow.select_designation(Some(HotelDesignation::Waiter));
    workflow.select_zone(Zone::D);
    workflow.set_mode(CalculationMode::TnHotelRule);
    workflow.update_tn_basic_percentage(decimal("10"));

    let zone_a = workflow.zone_state(Zone::A);
    assert_eq!(zone_a.basic, "2000");
    assert_eq!(zone_a.mode, CalculationMode::Manual);
    assert_eq!(zone_a.tn_basic_percentage, decimal("50"));

    for zone in [Zone::B, Zone::C] {
        let state = workflow.zone_state(zone);
        assert_eq!(state.basic, "4209.50");
        assert!(state.selected_designation.is_none());
    }
}

#[test]
fn test_split_unconfigured_designation_notice() {
    let mut workflow = SalarySplitWorkflow::new(load_tn_hotel_config());
    workflow.set_mode(CalculationMode::TnHotelRule);
    workflow.select_designation(Some(HotelDesignation::Driver));

    assert_eq!(
        workflow.notice(),
        Some(&AutoFillNotice::NoConfiguration {
            zone: Zone::A,
            designation: HotelDesignation::Driver,
        })
    );
    assert_eq!(workflow.current_state().tn_basic_percentage, decimal("50"));
}

// =============================================================================
// SECTION 3: Final Salary and Ledger
// =============================================================================

/// Standard attendance scenario from the payroll worksheet.
#[test]
fn test_final_salary_standard_scenario() {
    let mut workflow = FinalSalaryWorkflow::new(load_tn_hotel_config());
    fill_draft(&mut workflow, &standard_attendance());

    let calculation = workflow.calculation();
    assert!(calculation.is_valid);
    assert_eq!(calculation.paid_days, decimal("26"));
    assert_eq!(calculation.earned_salary.round_dp(2), decimal("8666.67"));
    assert_eq!(calculation.total_deductions, decimal("900"));
    assert_eq!(calculation.net_pay.round_dp(2), decimal("7766.67"));
}

#[test]
fn test_final_salary_short_mobile() {
    let mut workflow = FinalSalaryWorkflow::new(load_tn_hotel_config());
    fill_draft(&mut workflow, &standard_attendance());
    workflow.update_field(DraftField::Mobile, "12345");

    let calculation = workflow.calculation();
    assert!(!calculation.is_valid);
    assert!(
        calculation
            .error_message()
            .contains("valid 10-digit mobile number")
    );
}

#[test]
fn test_final_salary_paid_days_exceed_total() {
    let mut workflow = FinalSalaryWorkflow::new(load_tn_hotel_config());
    fill_draft(&mut workflow, &standard_attendance());
    workflow.update_field(DraftField::PresentDays, "25");

    let calculation = workflow.calculation();
    assert_eq!(calculation.paid_days, decimal("31"));
    assert_eq!(
        calculation.error,
        Some(FinalSalaryValidationError::PaidDaysExceedTotal)
    );
    assert!(workflow.finalize().is_none());
    assert!(workflow.records().is_empty());
}

#[test]
fn test_finalize_delete_and_refinalize() {
    let mut workflow = FinalSalaryWorkflow::new(load_tn_hotel_config());

    fill_draft(&mut workflow, &standard_attendance());
    let first = workflow.finalize().unwrap();
    fill_draft(&mut workflow, &standard_attendance());
    workflow.update_field(DraftField::Name, "Meena");
    let second = workflow.finalize().unwrap();

    assert_eq!(first.id(), RecordId(1));
    assert_eq!(second.id(), RecordId(2));
    assert_eq!(workflow.records()[0].id(), second.id());

    // Correcting the first record means delete + re-finalize.
    workflow.delete(first.id()).unwrap();
    fill_draft(&mut workflow, &standard_attendance());
    workflow.update_field(DraftField::SalaryAdvance, "0");
    let corrected = workflow.finalize().unwrap();

    assert_eq!(corrected.id(), RecordId(3));
    assert!(workflow.lookup(first.id()).is_none());
    assert_eq!(workflow.records().len(), 2);
    assert_eq!(
        corrected.pay_summary().net_pay.round_dp(2),
        decimal("8266.67")
    );
}

// =============================================================================
// SECTION 4: Messages
// =============================================================================

#[test]
fn test_message_for_finalized_record() {
    let config = load_tn_hotel_config();
    let mut workflow = FinalSalaryWorkflow::new(config.clone());
    fill_draft(&mut workflow, &standard_attendance());
    let record = workflow.finalize().unwrap();

    let message = OutboundMessage::for_record(&record, config.settings());

    assert_eq!(
        message.statement,
        render_statement(&record, &record.pay_summary())
    );
    assert!(message.statement.contains("Employee: Ravi Kumar\n"));
    assert!(message.statement.contains("Earned Salary: ₹8,666.67\n"));
    assert!(message.statement.contains("  ESI Deduction: ₹100.00\n"));
    assert!(message.statement.contains("  Total Deductions: ₹900.00\n"));
    assert!(message.statement.ends_with("Net Pay: ₹7,766.67"));
    assert!(!message.statement.contains("ESI Number"));

    assert!(
        message
            .chat_link
            .starts_with("https://wa.me/919876543210?text=Final%20Salary%20Statement%0A")
    );
    assert!(message.sms_link.starts_with("sms:9876543210?body="));
}

// =============================================================================
// SECTION 5: Collaborators
// =============================================================================

#[test]
fn test_prefill_from_staff_source_and_store_attendance() {
    let mut directory = StaffDirectory::new();
    directory
        .add(create_staff("Asha", "9000000001", "Room Attendant", "2100"))
        .unwrap();
    directory
        .add(create_staff("Bala", "", "Kitchen Helper", "1800"))
        .unwrap();

    let staff = directory.list_staff().unwrap();
    let asha = staff.iter().find(|s| s.name == "Asha").unwrap();

    let mut workflow = FinalSalaryWorkflow::new(load_tn_hotel_config());
    workflow.prefill_from_staff(asha);
    fill_draft(
        &mut workflow,
        &[
            (DraftField::PresentDays, "25"),
            (DraftField::WeeklyOffDays, "5"),
        ],
    );
    let record = workflow.finalize().unwrap();
    assert_eq!(record.monthly_gross_pay(), decimal("11019"));
    assert_eq!(record.pay_summary().net_pay, decimal("11019"));

    let mut store = InMemoryAttendanceStore::new();
    store
        .save_month(AttendanceMonth::from_record(&record, "2024-06"))
        .unwrap();

    let month = store.get_month("Asha", "2024-06").unwrap().unwrap();
    assert_eq!(month.gross_pay, decimal("11019"));
    assert_eq!(month.weekly_off_days, decimal("5"));
    assert_eq!(workflow.records().len(), 1);
}

#[test]
fn test_staff_without_mobile_cannot_finalize() {
    let bala = create_staff("Bala", "", "Kitchen Helper", "1800");

    let mut workflow = FinalSalaryWorkflow::new(load_tn_hotel_config());
    workflow.prefill_from_staff(&bala);
    workflow.update_field(DraftField::PresentDays, "30");

    assert_eq!(
        workflow.calculation().error,
        Some(FinalSalaryValidationError::MissingMobile)
    );
    assert!(workflow.finalize().is_none());
}
