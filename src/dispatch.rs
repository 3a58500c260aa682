//! Operation dispatch
//!
//! `perform_operation` consumes an operation's arguments from the stack,
//! evaluates it, and pushes exactly one result. Nothing here fails: missing
//! arguments read as zero and degenerate arithmetic (division by zero, the
//! logarithm of zero) pushes whatever the arithmetic produces.

use crate::ops::Operation;
use crate::stack::Stack;
use num_complex::Complex64;

const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Execute `operation` against `stack` and return the new top of stack
pub fn perform_operation(stack: &mut Stack, operation: Operation) -> Complex64 {
    let arity = operation.arity();
    let arguments = stack.peek_arguments(arity);
    stack.pop_frames(arity);
    let result = evaluate(operation, &arguments);
    stack.push(result)
}

/// Pure numeric kernel of an operation.
///
/// `args` holds exactly `operation.arity()` values, deepest first.
///
/// # Panics
///
/// Panics if `args` is shorter than `operation.arity()`.
pub fn evaluate(operation: Operation, args: &[Complex64]) -> Complex64 {
    debug_assert_eq!(args.len(), operation.arity());
    match operation {
        Operation::Drop => args[0],
        Operation::Add => args[0] + args[1],
        Operation::Subtract => args[0] - args[1],
        Operation::Multiply => args[0] * args[1],
        Operation::Divide => divide(args[0], args[1]),
        Operation::Negate => -args[0],
        Operation::Invert => divide(ONE, args[0]),
        Operation::SquareRoot => args[0].sqrt(),
        Operation::Log10 => args[0].ln() / std::f64::consts::LN_10,
        Operation::Power => args[0].powc(args[1]),
        Operation::Sine => args[0].sin(),
        Operation::ArcSine => args[0].asin(),
        Operation::ExtractReal => Complex64::new(args[0].re, 0.0),
        Operation::ExtractImaginary => Complex64::new(args[0].im, 0.0),
    }
}

/// Complex division that keeps real arithmetic exact.
///
/// A real divisor divides each component directly, so `1 / 0` is `+inf`
/// rather than the NaN the general formula yields through `0 / |b|^2`.
fn divide(a: Complex64, b: Complex64) -> Complex64 {
    if b.im != 0.0 {
        return a / b;
    }
    if a.im == 0.0 {
        Complex64::new(a.re / b.re, 0.0)
    } else {
        Complex64::new(a.re / b.re, a.im / b.re)
    }
}
