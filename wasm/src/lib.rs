//! NutriSensia WASM Module
//!
//! WebAssembly bindings for the calorie calculator, so the browser can
//! recompute on every slider movement without a round trip to the backend.
//! Inputs are not range-checked here; the sliders already clamp them.

use nutrisensia_shared::calculator::{compute, ActivityLevel, CalculatorInput, Gender, Goal};
use nutrisensia_shared::CalculatorError;
use wasm_bindgen::prelude::*;

/// Calculator result exposed to JavaScript, all values in kcal/day
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieEstimate {
    bmr: i32,
    tdee: i32,
    target_calories: i32,
}

#[wasm_bindgen]
impl CalorieEstimate {
    #[wasm_bindgen(getter)]
    pub fn bmr(&self) -> i32 {
        self.bmr
    }

    #[wasm_bindgen(getter)]
    pub fn tdee(&self) -> i32 {
        self.tdee
    }

    #[wasm_bindgen(getter, js_name = targetCalories)]
    pub fn target_calories(&self) -> i32 {
        self.target_calories
    }
}

fn estimate(
    age: i32,
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<CalorieEstimate, CalculatorError> {
    let input = CalculatorInput {
        age,
        height: height_cm,
        weight: weight_kg,
        gender: gender.parse::<Gender>()?,
        activity_level: activity_level.parse::<ActivityLevel>()?,
        goal: goal.parse::<Goal>()?,
    };
    let output = compute(&input);

    Ok(CalorieEstimate {
        bmr: output.bmr,
        tdee: output.tdee,
        target_calories: output.target_calories,
    })
}

fn estimate_json(input_json: &str) -> Result<String, CalculatorError> {
    let input: CalculatorInput = serde_json::from_str(input_json)?;
    Ok(serde_json::to_string(&compute(&input))?)
}

/// Calculate BMR, TDEE and target calories
///
/// `gender`, `activity_level` and `goal` take the same strings as the web form
/// (`"male"`, `"moderatelyActive"`, `"lose"`, ...).
#[wasm_bindgen(js_name = calculateCalories)]
pub fn calculate_calories(
    age: i32,
    height_cm: f64,
    weight_kg: f64,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> Result<CalorieEstimate, JsError> {
    estimate(age, height_cm, weight_kg, gender, activity_level, goal)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Same as `calculateCalories`, taking and returning JSON
#[wasm_bindgen(js_name = calculateCaloriesJson)]
pub fn calculate_calories_json(input_json: &str) -> Result<String, JsError> {
    estimate_json(input_json).map_err(|e| JsError::new(&e.to_string()))
}

/// Activity multiplier for a form value, e.g. 1.55 for `"moderatelyActive"`
#[wasm_bindgen(js_name = activityMultiplier)]
pub fn activity_multiplier(activity_level: &str) -> Result<f64, JsError> {
    activity_level
        .parse::<ActivityLevel>()
        .map(|level| level.multiplier())
        .map_err(|e| JsError::new(&e.to_string()))
}
