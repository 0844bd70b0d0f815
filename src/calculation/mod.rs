//! Calculation logic for the Salary Engine.
//!
//! This module contains the pure calculators: the gross-salary split into
//! Basic, DA and Other, the attendance-based final salary, the
//! (zone, designation) Basic lookup, and parsing of operator-entered text.

mod designation_lookup;
mod final_salary;
mod gross_split;
mod input;

pub use designation_lookup::{builtin_designation_table, lookup_basic_config};
pub use final_salary::{FinalSalaryInput, calculate_final_salary};
pub use gross_split::{BasicRule, GrossSplitInput, calculate_gross_split};
pub use input::{digits_only, is_valid_mobile, parse_amount, parse_decimal, strip_whitespace};
