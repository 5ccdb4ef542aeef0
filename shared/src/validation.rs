//! Opt-in input validation
//!
//! [`crate::calculator::compute`] never rejects input. Callers that want
//! range checks (the HTTP API, form handlers) go through this module, either
//! rejecting with [`validate_input`] or clamping with [`clamp_input`] the way
//! the UI sliders do.
//!
//! Range checks are declared on `CalculatorInput` with the `validator`
//! derive. Those checks let NaN through, so finiteness is checked by hand.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::calculator::{compute, CalculatorInput, CalculatorOutput};
use crate::errors::CalculatorError;

// ============================================================================
// Input Ranges
// ============================================================================

/// Inclusive range of a numeric input, with the slider step the UI uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range; NaN collapses to the lower bound
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    pub fn describe(&self) -> String {
        format!("must be between {} and {}", self.min, self.max)
    }
}

/// Age in years
pub const AGE_RANGE: InputRange = InputRange {
    min: 16.0,
    max: 90.0,
    step: 1.0,
};

/// Height in centimeters
pub const HEIGHT_RANGE_CM: InputRange = InputRange {
    min: 140.0,
    max: 210.0,
    step: 1.0,
};

/// Weight in kilograms
pub const WEIGHT_RANGE_KG: InputRange = InputRange {
    min: 40.0,
    max: 150.0,
    step: 0.5,
};

/// Fields in the order the form shows them; errors are reported in this order
const FIELD_ORDER: &[&str] = &["age", "height", "weight", "gender", "activityLevel", "goal"];

fn range_for(field: &str) -> Option<&'static InputRange> {
    match field {
        "age" => Some(&AGE_RANGE),
        "height" => Some(&HEIGHT_RANGE_CM),
        "weight" => Some(&WEIGHT_RANGE_KG),
        _ => None,
    }
}

// ============================================================================
// Field Validators
// ============================================================================

fn check_range(value: f64, range: &InputRange) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("must be a valid number".to_string());
    }
    if !range.contains(value) {
        return Err(range.describe());
    }
    Ok(())
}

/// Validate age (16-90 years)
pub fn validate_age(age: i32) -> Result<(), String> {
    check_range(f64::from(age), &AGE_RANGE)
}

/// Validate height (140-210 cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    check_range(height_cm, &HEIGHT_RANGE_CM)
}

/// Validate weight (40-150 kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    check_range(weight_kg, &WEIGHT_RANGE_KG)
}

/// Validate every numeric field, reporting all failures
pub fn validate_input(input: &CalculatorInput) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [("height", input.height), ("weight", input.weight)] {
        if !value.is_finite() {
            errors.push(ValidationError::new(field, "must be a valid number"));
        }
    }

    if let Err(derived) = input.validate() {
        for field in derived.field_errors().keys() {
            let field = field.to_string();
            if errors.iter().any(|e| e.field == field) {
                continue;
            }
            let message = range_for(&field)
                .map(InputRange::describe)
                .unwrap_or_else(|| "is invalid".to_string());
            errors.push(ValidationError::new(&field, &message));
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    errors.sort_by_key(|e| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(FIELD_ORDER.len())
    });
    Err(errors)
}

/// Clamp age, height and weight into their ranges
pub fn clamp_input(input: &CalculatorInput) -> CalculatorInput {
    CalculatorInput {
        age: input.age.clamp(AGE_RANGE.min as i32, AGE_RANGE.max as i32),
        height: HEIGHT_RANGE_CM.clamp(input.height),
        weight: WEIGHT_RANGE_KG.clamp(input.weight),
        ..*input
    }
}

/// Validate, then compute
pub fn compute_validated(input: &CalculatorInput) -> Result<CalculatorOutput, CalculatorError> {
    validate_input(input).map_err(CalculatorError::InvalidInput)?;
    Ok(compute(input))
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map wire field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Weight",
        "gender" => "Gender",
        "activityLevel" | "activity_level" => "Activity Level",
        "goal" => "Goal",
        "energyUnit" | "energy_unit" => "Energy Unit",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
