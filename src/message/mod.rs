//! Outbound message rendering.
//!
//! Formats a finalized record as a plain-text statement, builds the chat and
//! SMS deep links that carry it, and formats rupee amounts.
//!
//! # Example
//!
//! ```
//! use salary_engine::config::EngineConfig;
//! use salary_engine::message::OutboundMessage;
//! use salary_engine::models::DraftField;
//! use salary_engine::workflow::FinalSalaryWorkflow;
//!
//! let config = EngineConfig::default();
//! let mut workflow = FinalSalaryWorkflow::new(config.clone());
//! workflow.update_field(DraftField::Mobile, "9876543210");
//! workflow.update_field(DraftField::PresentDays, "30");
//! let record = workflow.finalize().unwrap();
//!
//! let message = OutboundMessage::for_record(&record, config.settings());
//! assert!(message.statement.ends_with("Net Pay: ₹8,419.00"));
//! assert!(message.chat_link.starts_with("https://wa.me/919876543210?text="));
//! ```

mod currency;
mod statement;

pub use currency::{CURRENCY_SYMBOL, format_currency, format_number};
pub use statement::{OutboundMessage, chat_link, render_statement, sms_link};
