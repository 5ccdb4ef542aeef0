//! Prometheus metrics recorder
//!
//! The recorder is process-global, so it is installed at most once and the
//! handle is shared by every router built afterwards.

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Counter of calculator requests, labelled by `outcome`
pub const CALCULATOR_REQUESTS: &str = "calculator_requests_total";

static HANDLE: OnceLock<Result<PrometheusHandle, String>> = OnceLock::new();

/// Install the Prometheus recorder, or return the already-installed handle
pub fn init_metrics() -> Result<PrometheusHandle> {
    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| e.to_string())?;
            metrics::describe_counter!(
                CALCULATOR_REQUESTS,
                "Calorie calculations served, by outcome"
            );
            Ok(handle)
        })
        .clone()
        .map_err(anyhow::Error::msg)
}

/// Outcome label for [`CALCULATOR_REQUESTS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationOutcome {
    Ok,
    Clamped,
    Invalid,
}

impl CalculationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationOutcome::Ok => "ok",
            CalculationOutcome::Clamped => "clamped",
            CalculationOutcome::Invalid => "invalid",
        }
    }
}

pub fn record_calculation(outcome: CalculationOutcome) {
    metrics::counter!(CALCULATOR_REQUESTS, "outcome" => outcome.as_str()).increment(1);
}
