//! Common test utilities for calcr integration tests

pub use calcr::{evaluate, EvalError};

/// Helper to evaluate and unwrap a numeric result
#[allow(dead_code)]
pub fn eval_ok(input: &str) -> f64 {
    evaluate(input).unwrap()
}

/// Helper to evaluate and unwrap the error
#[allow(dead_code)]
pub fn eval_err(input: &str) -> EvalError {
    evaluate(input).unwrap_err()
}
