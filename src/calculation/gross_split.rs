//! Gross-salary split calculation.
//!
//! This module splits a gross salary into Basic, the fixed DA and Other, with
//! Basic either entered directly or derived from a percentage of gross.

use rust_decimal::Decimal;

use crate::config::EngineSettings;
use crate::models::{AuditStep, CalculationMode, GrossSplitResult, SplitValidationError, ZoneState};

use super::input::parse_amount;

/// How the Basic component is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicRule {
    /// A flat amount entered by the operator.
    Manual {
        /// The entered Basic amount.
        basic: Decimal,
    },
    /// A percentage of gross salary (Tamil Nadu hotel rule).
    TnHotelRule {
        /// Basic as a percentage of gross.
        basic_percentage: Decimal,
    },
}

impl BasicRule {
    fn mode(&self) -> CalculationMode {
        match self {
            BasicRule::Manual { .. } => CalculationMode::Manual,
            BasicRule::TnHotelRule { .. } => CalculationMode::TnHotelRule,
        }
    }
}

/// Parsed inputs to [`calculate_gross_split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrossSplitInput {
    /// The gross salary to split.
    pub gross_salary: Decimal,
    /// The fixed dearness allowance.
    pub da: Decimal,
    /// How Basic is resolved.
    pub rule: BasicRule,
}

impl GrossSplitInput {
    /// Builds calculator input from a zone's state.
    ///
    /// Blank or unparsable amounts count as zero. DA always comes from the
    /// settings, never from the zone.
    pub fn from_zone_state(state: &ZoneState, settings: &EngineSettings) -> Self {
        let rule = match state.mode {
            CalculationMode::Manual => BasicRule::Manual {
                basic: parse_amount(&state.basic),
            },
            CalculationMode::TnHotelRule => BasicRule::TnHotelRule {
                basic_percentage: state.tn_basic_percentage,
            },
        };
        Self {
            gross_salary: parse_amount(&state.gross_salary),
            da: settings.fixed_da,
            rule,
        }
    }
}

/// Splits a gross salary into Basic, DA and Other.
///
/// Basic is the manual amount, or `gross * percentage / 100` under the TN
/// hotel rule. `other = gross - basic - da` is floored at zero in the result,
/// but the unfloored value is what validation sees.
///
/// Validation rules, first failure wins:
/// 1. gross salary must be greater than zero
/// 2. every derived amount must fit in a `Decimal`
/// 3. Basic + DA must not exceed gross
/// 4. unfloored Other must not be negative
/// 5. the TN hotel rule percentage must not be negative
/// 6. a manual Basic must not be negative
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{calculate_gross_split, BasicRule, GrossSplitInput};
/// use rust_decimal::Decimal;
///
/// let input = GrossSplitInput {
///     gross_salary: Decimal::new(20000, 0),
///     da: Decimal::new(8419, 0),
///     rule: BasicRule::TnHotelRule { basic_percentage: Decimal::new(50, 0) },
/// };
/// let result = calculate_gross_split(&input);
/// assert!(result.is_valid);
/// assert_eq!(result.basic, Decimal::new(10000, 0));
/// assert_eq!(result.other, Decimal::new(1581, 0));
/// ```
pub fn calculate_gross_split(input: &GrossSplitInput) -> GrossSplitResult {
    let gross = input.gross_salary;
    let da = input.da;

    let basic = match input.rule {
        BasicRule::Manual { basic } => Some(basic),
        BasicRule::TnHotelRule { basic_percentage } => gross
            .checked_mul(basic_percentage)
            .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED)),
    };
    let basic_plus_da = basic.and_then(|basic| basic.checked_add(da));
    let other_unfloored = basic
        .and_then(|basic| gross.checked_sub(basic))
        .and_then(|rest| rest.checked_sub(da));

    let error = if gross <= Decimal::ZERO {
        Some(SplitValidationError::NonPositiveGross)
    } else {
        match (basic_plus_da, other_unfloored) {
            (Some(basic_plus_da), Some(other_unfloored)) => {
                if basic_plus_da > gross {
                    Some(SplitValidationError::BasicPlusDaExceedsGross)
                } else if other_unfloored < Decimal::ZERO {
                    Some(SplitValidationError::NegativeOther)
                } else {
                    match input.rule {
                        BasicRule::TnHotelRule { basic_percentage }
                            if basic_percentage < Decimal::ZERO =>
                        {
                            Some(SplitValidationError::NegativePercentage)
                        }
                        BasicRule::Manual { basic } if basic < Decimal::ZERO => {
                            Some(SplitValidationError::NegativeBasic)
                        }
                        _ => None,
                    }
                }
            }
            _ => Some(SplitValidationError::AmountOutOfRange),
        }
    };

    let basic = basic.unwrap_or(Decimal::ZERO);
    let other = other_unfloored.unwrap_or(Decimal::ZERO).max(Decimal::ZERO);

    let rule_input = match input.rule {
        BasicRule::Manual { basic } => serde_json::json!({
            "gross_salary": gross.normalize().to_string(),
            "da": da.normalize().to_string(),
            "mode": input.rule.mode().as_str(),
            "basic": basic.normalize().to_string()
        }),
        BasicRule::TnHotelRule { basic_percentage } => serde_json::json!({
            "gross_salary": gross.normalize().to_string(),
            "da": da.normalize().to_string(),
            "mode": input.rule.mode().as_str(),
            "basic_percentage": basic_percentage.normalize().to_string()
        }),
    };

    let reasoning = match error {
        None => format!(
            "₹{} - ₹{} (Basic) - ₹{} (DA) = ₹{} (Other)",
            gross.normalize(),
            basic.normalize(),
            da.normalize(),
            other.normalize()
        ),
        Some(err) => format!(
            "Split of ₹{} rejected: {}",
            gross.normalize(),
            err
        ),
    };

    let audit_step = AuditStep {
        rule_id: "gross_salary_split".to_string(),
        rule_name: "Gross Salary Split".to_string(),
        input: rule_input,
        output: serde_json::json!({
            "basic": basic.normalize().to_string(),
            "da": da.normalize().to_string(),
            "other": other.normalize().to_string(),
            "other_unfloored": other_unfloored.map(|v| v.normalize().to_string()),
            "is_valid": error.is_none()
        }),
        reasoning,
    };

    GrossSplitResult {
        gross_salary: gross,
        basic,
        da,
        other,
        is_valid: error.is_none(),
        error,
        audit_step,
    }
}
