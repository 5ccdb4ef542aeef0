//! Business logic services
//!
//! Services wrap the shared calculator with request-level policy.

pub mod calculator;

pub use calculator::CalculatorService;
