//! Salary Computation & Finalization Engine for small hotel businesses
//!
//! This crate splits a gross salary into Basic, DA and Other across four
//! salary zones, computes attendance-based final pay, keeps a session ledger
//! of finalized pay records, and renders them as chat and SMS statements.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod external;
pub mod message;
pub mod models;
pub mod workflow;
