//! Common test utilities for rpnc integration tests

pub use rpnc::{Calculator, Complex64};
use rpnc::display::{format_value, DEFAULT_PRECISION};

/// Helper to evaluate input and return the formatted top of stack
#[allow(dead_code)]
pub fn eval(input: &str) -> Result<String, String> {
    let mut calc = Calculator::new();
    let top = calc.eval(input).map_err(|e| e.to_string())?;
    Ok(top
        .map(|z| format_value(z, DEFAULT_PRECISION))
        .unwrap_or_default())
}

/// Helper to evaluate input and return the raw stack, bottom first
#[allow(dead_code)]
pub fn eval_stack(input: &str) -> Vec<Complex64> {
    let mut calc = Calculator::new();
    calc.eval(input).unwrap();
    calc.stack().iter().copied().collect()
}

/// Shorthand for a real value
#[allow(dead_code)]
pub fn real(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}
