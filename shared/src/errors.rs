//! Error types for the NutriSensia calculator

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised around the calculator core
///
/// The core itself is total; these come from parsing and the opt-in
/// validation layer.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Unknown activity level: {0}")]
    UnknownActivityLevel(String),

    #[error("Unknown goal: {0}")]
    UnknownGoal(String),

    #[error("Unknown energy unit: {0}")]
    UnknownEnergyUnit(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalculatorError {
    /// Field-level errors, empty unless this is `InvalidInput`
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            CalculatorError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::user_message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_lists_fields() {
        let err = CalculatorError::InvalidInput(vec![
            ValidationError::new("age", "must be between 16 and 90"),
            ValidationError::new("weight", "must be a valid number"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid input: Age: must be between 16 and 90; Weight: must be a valid number"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_parse_errors_have_no_field_errors() {
        let err = CalculatorError::UnknownGoal("bulk".to_string());
        assert!(err.validation_errors().is_empty());
        assert_eq!(err.to_string(), "Unknown goal: bulk");
    }
}
