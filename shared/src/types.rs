//! API request and response types

use serde::{Deserialize, Serialize};

use crate::calculator::{ActivityLevel, CalculatorInput, CalculatorOutput, Gender, Goal};
use crate::units::EnergyUnit;
use crate::validation::{InputRange, AGE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG};

/// Calculator request: the form fields plus an optional display unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(flatten)]
    pub input: CalculatorInput,
    #[serde(default)]
    pub energy_unit: EnergyUnit,
}

/// Result values converted to the requested energy unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyDisplay {
    pub unit: String,
    pub bmr: i32,
    pub tdee: i32,
    pub target_calories: i32,
}

/// Calculator response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// Input the result was computed from (after clamping, if any)
    pub input: CalculatorInput,
    /// Result in kcal/day
    pub result: CalculatorOutput,
    pub activity_multiplier: f64,
    pub goal_offset_kcal: i32,
    /// True when out-of-range input was clamped before computing
    pub clamped: bool,
    pub display: EnergyDisplay,
}

impl EstimateResponse {
    pub fn new(
        input: CalculatorInput,
        result: CalculatorOutput,
        energy_unit: EnergyUnit,
        clamped: bool,
    ) -> Self {
        Self {
            input,
            result,
            activity_multiplier: input.activity_level.multiplier(),
            goal_offset_kcal: input.goal.offset_kcal(),
            clamped,
            display: EnergyDisplay {
                unit: energy_unit.abbreviation().to_string(),
                bmr: energy_unit.display_value(result.bmr),
                tdee: energy_unit.display_value(result.tdee),
                target_calories: energy_unit.display_value(result.target_calories),
            },
        }
    }
}

/// Activity level choice for the form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLevelOption {
    pub value: ActivityLevel,
    pub multiplier: f64,
    pub description: String,
}

/// Goal choice for the form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOption {
    pub value: Goal,
    pub offset_kcal: i32,
    pub description: String,
}

/// Slider ranges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputRanges {
    pub age: InputRange,
    pub height: InputRange,
    pub weight: InputRange,
}

/// Everything a form needs to render the calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorOptionsResponse {
    pub genders: Vec<Gender>,
    pub activity_levels: Vec<ActivityLevelOption>,
    pub goals: Vec<GoalOption>,
    pub ranges: InputRanges,
    pub energy_units: Vec<EnergyUnit>,
}

impl CalculatorOptionsResponse {
    pub fn current() -> Self {
        Self {
            genders: Gender::ALL.to_vec(),
            activity_levels: ActivityLevel::ALL
                .iter()
                .map(|level| ActivityLevelOption {
                    value: *level,
                    multiplier: level.multiplier(),
                    description: level.description().to_string(),
                })
                .collect(),
            goals: Goal::ALL
                .iter()
                .map(|goal| GoalOption {
                    value: *goal,
                    offset_kcal: goal.offset_kcal(),
                    description: goal.description().to_string(),
                })
                .collect(),
            ranges: InputRanges {
                age: AGE_RANGE,
                height: HEIGHT_RANGE_CM,
                weight: WEIGHT_RANGE_KG,
            },
            energy_units: vec![EnergyUnit::Kcal, EnergyUnit::Kj],
        }
    }
}
