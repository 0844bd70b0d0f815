//! Salary zone model.
//!
//! A zone is one of four independent salary-policy contexts. Each zone keeps
//! its own calculation inputs and designation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the four fixed salary zones.
///
/// # Example
///
/// ```
/// use salary_engine::models::Zone;
///
/// let zone: Zone = "c".parse().unwrap();
/// assert_eq!(zone, Zone::C);
/// assert_eq!(zone.to_string(), "C");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    /// Zone A.
    A,
    /// Zone B.
    B,
    /// Zone C.
    C,
    /// Zone D.
    D,
}

impl Zone {
    /// Every zone, in display order.
    pub const ALL: [Zone; 4] = [Zone::A, Zone::B, Zone::C, Zone::D];

    /// Returns the single-letter code of the zone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::A => "A",
            Zone::B => "B",
            Zone::C => "C",
            Zone::D => "D",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Zone::A),
            "B" => Ok(Zone::B),
            "C" => Ok(Zone::C),
            "D" => Ok(Zone::D),
            _ => Err(EngineError::InvalidConfig {
                field: "zone".to_string(),
                message: format!("unknown zone '{}'", s),
            }),
        }
    }
}
