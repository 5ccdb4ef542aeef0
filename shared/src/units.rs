//! Energy unit handling
//!
//! The calculator always works in kcal. Conversion happens only when results
//! are rendered for a user who prefers kilojoules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::round_half_up;
use crate::errors::CalculatorError;

/// Kilojoules per kilocalorie (thermochemical calorie)
pub const KJ_PER_KCAL: f64 = 4.184;

/// Energy unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert from this unit to kcal
    pub fn to_kcal(&self, value: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => value,
            EnergyUnit::Kj => value / KJ_PER_KCAL,
        }
    }

    /// Convert from kcal to this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * KJ_PER_KCAL,
        }
    }

    /// Convert a whole-kcal value for display, rounded half up
    pub fn display_value(&self, kcal: i32) -> i32 {
        round_half_up(self.from_kcal(f64::from(kcal)))
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for EnergyUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kcal" | "cal" | "calorie" | "calories" => Ok(EnergyUnit::Kcal),
            "kj" | "kilojoule" | "kilojoules" => Ok(EnergyUnit::Kj),
            _ => Err(CalculatorError::UnknownEnergyUnit(s.to_string())),
        }
    }
}
