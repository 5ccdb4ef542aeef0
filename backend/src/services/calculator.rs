//! Calorie calculator service
//!
//! Applies the configured validation policy around the pure calculator:
//! - strict: out-of-range input is rejected with a validation error
//! - lenient: out-of-range input is clamped into range, as the UI sliders do

use crate::config::CalculatorConfig;
use crate::error::ApiError;
use crate::telemetry::{record_calculation, CalculationOutcome};
use nutrisensia_shared::types::{EstimateRequest, EstimateResponse};
use nutrisensia_shared::{clamp_input, compute, validate_input};
use tracing::{debug, warn};

/// Calculator service for calorie estimates
pub struct CalculatorService;

impl CalculatorService {
    /// Estimate BMR, TDEE and target calories for a form submission
    pub fn estimate(
        config: &CalculatorConfig,
        req: EstimateRequest,
    ) -> Result<EstimateResponse, ApiError> {
        let (input, clamped) = match validate_input(&req.input) {
            Ok(()) => (req.input, false),
            Err(errors) if config.strict_validation => {
                warn!(
                    fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
                    "Rejected out-of-range calculator input"
                );
                record_calculation(CalculationOutcome::Invalid);
                return Err(ApiError::from_validation_errors(&errors));
            }
            Err(errors) => {
                debug!(count = errors.len(), "Clamping out-of-range calculator input");
                (clamp_input(&req.input), true)
            }
        };

        let result = compute(&input);
        record_calculation(if clamped {
            CalculationOutcome::Clamped
        } else {
            CalculationOutcome::Ok
        });

        debug!(
            bmr = result.bmr,
            tdee = result.tdee,
            target_calories = result.target_calories,
            activity_level = %input.activity_level,
            goal = %input.goal,
            "Computed calorie estimate"
        );

        Ok(EstimateResponse::new(input, result, req.energy_unit, clamped))
    }
}
