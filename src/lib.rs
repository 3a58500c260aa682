//! rpnc - a complex-number RPN calculator
//!
//! # Overview
//!
//! Values are pushed onto a bounded stack and operations consume their
//! arguments from the top, pushing exactly one result back.
//!
//! ```text
//! 2 3 +            # Stack: [5]
//! 3+4i sqrt        # Stack: [5, 2+1i]
//! 2 3 ^            # a is the base, b the exponent -> 8
//! ```
//!
//! ## Never failing
//!
//! - Pushing onto a full stack evicts the oldest value.
//! - An operation with too few values on the stack reads the missing
//!   arguments as zero: `5 -` with nothing else on the stack is `5 - 0`.
//! - Division by zero and friends push whatever the arithmetic yields.
//!
//! # Example
//!
//! ```rust
//! use rpnc::{perform_operation, Operation, Stack};
//! use num_complex::Complex64;
//!
//! let mut stack = Stack::new();
//! stack.push(Complex64::new(2.0, 0.0));
//! stack.push(Complex64::new(3.0, 0.0));
//! let result = perform_operation(&mut stack, Operation::Add);
//! assert_eq!(result, Complex64::new(5.0, 0.0));
//! assert_eq!(stack.depth(), 1);
//! ```

pub mod ast;
pub mod calculator;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod keypad;
pub mod lexer;
pub mod ops;
pub mod parser;
pub mod stack;

// Re-export commonly used items
pub use ast::{Instruction, Program};
pub use calculator::{CalcError, Calculator};
pub use config::{Config, ConfigError};
pub use dispatch::{evaluate, perform_operation};
pub use keypad::{Key, KeyError, Keypad};
pub use lexer::{lex, LexError, Token};
pub use num_complex::Complex64;
pub use ops::{Operation, OperationError};
pub use parser::{parse, ParseError};
pub use stack::{Arguments, Stack, MAX_ARGUMENTS, STACK_CAPACITY};

/// Convenience function to evaluate an rpnc program on a fresh calculator
pub fn eval(input: &str) -> Result<Option<Complex64>, String> {
    let mut calculator = Calculator::new();
    calculator.eval(input).map_err(|e| e.to_string())
}
