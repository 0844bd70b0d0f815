//! Final salary statement rendering and deep links.
//!
//! The statement is plain text, one item per line. Chat and SMS links carry
//! the percent-encoded statement so the operator's device can open a
//! pre-filled message; nothing is sent from here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::digits_only;
use crate::config::EngineSettings;
use crate::models::{FinalSalaryEmployee, PaySummary};

use super::currency::format_currency;

/// A statement together with its chat and SMS links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Plain-text statement.
    pub statement: String,
    /// Chat deep link with the statement as text.
    pub chat_link: String,
    /// SMS deep link with the statement as body.
    pub sms_link: String,
}

impl OutboundMessage {
    /// Renders the statement and both links for a finalized record.
    pub fn for_record(record: &FinalSalaryEmployee, settings: &EngineSettings) -> Self {
        let statement = render_statement(record, &record.pay_summary());
        Self {
            chat_link: chat_link(record.mobile(), &statement, settings),
            sms_link: sms_link(record.mobile(), &statement),
            statement,
        }
    }
}

/// Renders the plain-text statement for a record.
///
/// Designation, PF number and ESI number lines are omitted when blank.
/// Individual deductions are listed only when greater than zero; the total
/// is always shown.
pub fn render_statement(record: &FinalSalaryEmployee, summary: &PaySummary) -> String {
    let mut lines = vec![
        "Final Salary Statement".to_string(),
        String::new(),
        format!("Employee: {}", record.name()),
    ];

    let optional = [
        ("Designation", record.designation()),
        ("PF Number", record.pf_number()),
        ("ESI Number", record.esi_number()),
    ];
    for (label, value) in optional {
        if !value.trim().is_empty() {
            lines.push(format!("{}: {}", label, value));
        }
    }

    lines.extend([
        String::new(),
        format!("Basic: {}", format_currency(record.basic())),
        format!("DA: {}", format_currency(record.da())),
        format!("Other Allowance: {}", format_currency(record.other_allowance())),
        format!("Monthly Gross Pay: {}", format_currency(record.monthly_gross_pay())),
        String::new(),
        format!("Present Days: {}", record.present_days().normalize()),
        format!("Paid Leave Days: {}", record.paid_leave_days().normalize()),
        format!("Weekly Off Days: {}", record.weekly_off_days().normalize()),
        format!(
            "Paid Days: {} / {}",
            record.paid_days().normalize(),
            record.total_days_in_month().normalize()
        ),
        format!("Earned Salary: {}", format_currency(summary.earned_salary)),
        String::new(),
        "Deductions:".to_string(),
    ]);

    let deductions = [
        ("Salary Advance", record.salary_advance()),
        ("PF Deduction", record.pf_deduction()),
        ("ESI Deduction", record.esi_deduction()),
    ];
    for (label, amount) in deductions {
        if amount > Decimal::ZERO {
            lines.push(format!("  {}: {}", label, format_currency(amount)));
        }
    }

    lines.extend([
        format!("  Total Deductions: {}", format_currency(summary.total_deductions)),
        String::new(),
        format!("Net Pay: {}", format_currency(summary.net_pay)),
    ]);

    lines.join("\n")
}

/// Builds the chat deep link for a mobile number.
///
/// The number is reduced to digits and prefixed with the country calling
/// code unless it already carries it.
///
/// # Examples
///
/// ```
/// use salary_engine::config::EngineSettings;
/// use salary_engine::message::chat_link;
///
/// let settings = EngineSettings::default();
/// assert_eq!(
///     chat_link("98765 43210", "Net Pay: ₹1", &settings),
///     "https://wa.me/919876543210?text=Net%20Pay%3A%20%E2%82%B91"
/// );
/// ```
pub fn chat_link(mobile: &str, statement: &str, settings: &EngineSettings) -> String {
    format!(
        "{}{}?text={}",
        settings.chat_link_base,
        with_calling_code(mobile, &settings.country_calling_code),
        urlencoding::encode(statement)
    )
}

/// Builds the SMS deep link for a mobile number.
pub fn sms_link(mobile: &str, statement: &str) -> String {
    format!(
        "sms:{}?body={}",
        digits_only(mobile),
        urlencoding::encode(statement)
    )
}

fn with_calling_code(mobile: &str, calling_code: &str) -> String {
    let digits = digits_only(mobile);
    let already_prefixed = digits.len() == 10 + calling_code.len() && digits.starts_with(calling_code);
    if already_prefixed {
        digits
    } else {
        format!("{}{}", calling_code, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinalSalaryFields, RecordId};
    use chrono::Utc;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_record() -> FinalSalaryEmployee {
        let fields = FinalSalaryFields {
            name: "Ravi Kumar".to_string(),
            mobile: "9876543210".to_string(),
            pf_number: "TN/PF/123".to_string(),
            esi_number: String::new(),
            designation: "Waiter".to_string(),
            basic: dec("1000"),
            da: dec("8419"),
            other_allowance: dec("581"),
            present_days: dec("20"),
            paid_leave_days: dec("2"),
            weekly_off_days: dec("4"),
            total_days_in_month: dec("30"),
            salary_advance: dec("500"),
            pf_deduction: dec("300"),
            esi_deduction: Decimal::ZERO,
        };
        FinalSalaryEmployee::new(RecordId(1), fields, Utc::now())
    }

    /// MR-001: full statement layout
    #[test]
    fn test_render_statement_layout() {
        let record = create_test_record();
        let statement = render_statement(&record, &record.pay_summary());

        let expected = [
            "Final Salary Statement",
            "",
            "Employee: Ravi Kumar",
            "Designation: Waiter",
            "PF Number: TN/PF/123",
            "",
            "Basic: ₹1,000.00",
            "DA: ₹8,419.00",
            "Other Allowance: ₹581.00",
            "Monthly Gross Pay: ₹10,000.00",
            "",
            "Present Days: 20",
            "Paid Leave Days: 2",
            "Weekly Off Days: 4",
            "Paid Days: 26 / 30",
            "Earned Salary: ₹8,666.67",
            "",
            "Deductions:",
            "  Salary Advance: ₹500.00",
            "  PF Deduction: ₹300.00",
            "  Total Deductions: ₹800.00",
            "",
            "Net Pay: ₹7,866.67",
        ]
        .join("\n");

        assert_eq!(statement, expected);
    }

    #[test]
    fn test_statement_omits_zero_deductions_and_blank_ids() {
        let mut fields = FinalSalaryFields {
            name: "Meena".to_string(),
            mobile: "9123456780".to_string(),
            pf_number: String::new(),
            esi_number: String::new(),
            designation: String::new(),
            basic: dec("2000"),
            da: dec("8419"),
            other_allowance: Decimal::ZERO,
            present_days: dec("28.5"),
            paid_leave_days: Decimal::ZERO,
            weekly_off_days: Decimal::ZERO,
            total_days_in_month: dec("31"),
            salary_advance: Decimal::ZERO,
            pf_deduction: Decimal::ZERO,
            esi_deduction: Decimal::ZERO,
        };
        fields.esi_number = "  ".to_string();
        let record = FinalSalaryEmployee::new(RecordId(2), fields, Utc::now());

        let statement = render_statement(&record, &record.pay_summary());

        assert!(!statement.contains("Designation:"));
        assert!(!statement.contains("PF Number:"));
        assert!(!statement.contains("ESI Number:"));
        assert!(!statement.contains("Salary Advance:"));
        assert!(statement.contains("Present Days: 28.5\n"));
        assert!(statement.contains("Deductions:\n  Total Deductions: ₹0.00\n"));
    }

    #[test]
    fn test_chat_link_prefixes_calling_code() {
        let settings = EngineSettings::default();
        let link = chat_link("98765-43210", "Hi", &settings);
        assert_eq!(link, "https://wa.me/919876543210?text=Hi");
    }

    #[test]
    fn test_chat_link_keeps_existing_calling_code() {
        let settings = EngineSettings::default();
        assert_eq!(
            chat_link("+91 98765 43210", "Hi", &settings),
            "https://wa.me/919876543210?text=Hi"
        );
    }

    #[test]
    fn test_chat_link_prefixes_number_starting_with_code_digits() {
        let settings = EngineSettings::default();
        assert_eq!(
            chat_link("9198765432", "Hi", &settings),
            "https://wa.me/919198765432?text=Hi"
        );
    }

    #[test]
    fn test_sms_link_uses_bare_digits() {
        assert_eq!(
            sms_link("98765 43210", "Net Pay\n₹1"),
            "sms:9876543210?body=Net%20Pay%0A%E2%82%B91"
        );
    }

    /// MR-002: links decode back to the statement
    #[test]
    fn test_links_decode_to_statement() {
        let record = create_test_record();
        let settings = EngineSettings::default();
        let message = OutboundMessage::for_record(&record, &settings);

        let (_, chat_text) = message.chat_link.split_once("?text=").unwrap();
        let (_, sms_body) = message.sms_link.split_once("?body=").unwrap();

        assert_eq!(urlencoding::decode(chat_text).unwrap(), message.statement);
        assert_eq!(urlencoding::decode(sms_body).unwrap(), message.statement);
        assert!(!chat_text.contains(' '));
        assert!(!chat_text.contains('\n'));
    }
}
