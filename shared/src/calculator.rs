//! Calorie estimation calculator
//!
//! Estimates Basal Metabolic Rate, Total Daily Energy Expenditure and a
//! goal-adjusted daily calorie target from a person's biometric inputs.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: `compute` has no side effects and no hidden state
//! 2. **Total**: every input produces an output, range checks live in
//!    [`crate::validation`]
//! 3. **Stable Rounding**: each stage rounds half up and the next stage
//!    consumes the rounded integer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::CalculatorError;

// ============================================================================
// Input Types
// ============================================================================

/// Gender used to select the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Constant term of the Mifflin-St Jeor equation
    pub fn bmr_constant(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(CalculatorError::UnknownGender(s.to_string())),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(alias = "lightly_active")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "moderately_active")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(alias = "very_active")]
    VeryActive,
    /// Twice-daily training or a physical job
    Athlete,
}

impl ActivityLevel {
    /// Every level, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::Athlete,
    ];

    /// Multiplier in thousandths, used for exact integer TDEE arithmetic
    pub fn multiplier_permille(&self) -> i64 {
        match self {
            ActivityLevel::Sedentary => 1200,
            ActivityLevel::LightlyActive => 1375,
            ActivityLevel::ModeratelyActive => 1550,
            ActivityLevel::VeryActive => 1725,
            ActivityLevel::Athlete => 1900,
        }
    }

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        self.multiplier_permille() as f64 / 1000.0
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::Athlete => "Twice-daily training or a physical job",
        }
    }

    /// Wire name, as sent by the web form
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightlyActive",
            ActivityLevel::ModeratelyActive => "moderatelyActive",
            ActivityLevel::VeryActive => "veryActive",
            ActivityLevel::Athlete => "athlete",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = CalculatorError;

    /// Accepts camelCase and snake_case spellings, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightlyactive" => Ok(ActivityLevel::LightlyActive),
            "moderatelyactive" => Ok(ActivityLevel::ModeratelyActive),
            "veryactive" => Ok(ActivityLevel::VeryActive),
            "athlete" => Ok(ActivityLevel::Athlete),
            _ => Err(CalculatorError::UnknownActivityLevel(s.to_string())),
        }
    }
}

/// Weight goal applied on top of TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Maintain,
    /// ~0.5 kg/week loss
    Lose,
    /// ~0.5 kg/week gain
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Lose, Goal::Gain];

    /// Daily calorie adjustment relative to TDEE
    pub fn offset_kcal(&self) -> i32 {
        match self {
            Goal::Maintain => 0,
            Goal::Lose => -500,
            Goal::Gain => 500,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain current weight",
            Goal::Lose => "Lose about 0.5 kg per week",
            Goal::Gain => "Gain about 0.5 kg per week",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintain" => Ok(Goal::Maintain),
            "lose" => Ok(Goal::Lose),
            "gain" => Ok(Goal::Gain),
            _ => Err(CalculatorError::UnknownGoal(s.to_string())),
        }
    }
}

/// Biometric and lifestyle inputs
///
/// The range attributes are only consulted by [`crate::validation`];
/// [`compute`] accepts any value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    /// Age in years
    #[validate(range(min = 16, max = 90))]
    pub age: i32,
    /// Height in centimeters
    #[validate(range(min = 140.0, max = 210.0))]
    pub height: f64,
    /// Weight in kilograms
    #[validate(range(min = 40.0, max = 150.0))]
    pub weight: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// Calculation result, all values in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorOutput {
    pub bmr: i32,
    pub tdee: i32,
    pub target_calories: i32,
}

// ============================================================================
// Calculation
// ============================================================================

/// Round to the nearest integer, exact halves toward positive infinity
///
/// NaN maps to 0 and infinities saturate at the `i32` bounds.
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    round_half_up(base + gender.bmr_constant())
}

/// Calculate Total Daily Energy Expenditure from a rounded BMR
///
/// TDEE = BMR × activity multiplier, rounded half up.
pub fn calculate_tdee(bmr: i32, activity_level: ActivityLevel) -> i32 {
    let scaled = i64::from(bmr) * activity_level.multiplier_permille();
    // +500 then floor-divide by 1000 is round-half-up for either sign
    let tdee = (scaled + 500).div_euclid(1000);
    tdee.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Apply the goal offset to TDEE; no physiological floor is enforced
pub fn apply_goal(tdee: i32, goal: Goal) -> i32 {
    tdee.saturating_add(goal.offset_kcal())
}

/// Compute BMR, TDEE and target calories for the given input
pub fn compute(input: &CalculatorInput) -> CalculatorOutput {
    let bmr = calculate_bmr(input.weight, input.height, input.age, input.gender);
    let tdee = calculate_tdee(bmr, input.activity_level);
    let target_calories = apply_goal(tdee, input.goal);

    CalculatorOutput {
        bmr,
        tdee,
        target_calories,
    }
}
