//! NutriSensia Shared Library
//!
//! This crate contains the calorie estimation calculator and the types
//! shared by the backend and WASM modules.

pub mod calculator;
pub mod errors;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use calculator::{
    compute, ActivityLevel, CalculatorInput, CalculatorOutput, Gender, Goal,
};
pub use errors::CalculatorError;
pub use units::EnergyUnit;
pub use validation::{clamp_input, compute_validated, validate_input, ValidationError};
