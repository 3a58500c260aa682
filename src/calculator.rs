//! Calculator session
//!
//! A `Calculator` owns one stack and runs programs against it. Sessions are
//! independent; two calculators never share state.

use crate::ast::{Instruction, Program};
use crate::config::Config;
use crate::display::{format_status, format_value, DEFAULT_PRECISION};
use crate::dispatch::perform_operation;
use crate::lexer::{lex, LexError};
use crate::ops::Operation;
use crate::parser::{parse, ParseError};
use crate::stack::{Stack, STACK_CAPACITY};
use num_complex::Complex64;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A calculator with its own stack
#[derive(Debug, Clone)]
pub struct Calculator {
    stack: Stack,
    /// Print each instruction and the resulting top to stderr
    trace_mode: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_capacity(STACK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Calculator {
            stack: Stack::with_capacity(capacity),
            trace_mode: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.capacity)
    }

    /// Enable or disable trace mode
    pub fn set_trace_mode(&mut self, enabled: bool) {
        self.trace_mode = enabled;
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn top(&self) -> Option<Complex64> {
        self.stack.top()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Option<Complex64> {
        let top = self.stack.top();
        self.stack.pop_frames(1);
        top
    }

    pub fn push(&mut self, value: Complex64) -> Complex64 {
        self.stack.push(value)
    }

    pub fn perform(&mut self, operation: Operation) -> Complex64 {
        perform_operation(&mut self.stack, operation)
    }

    /// Run a program, returning the top of the stack afterwards
    pub fn run(&mut self, program: &Program) -> Option<Complex64> {
        for instruction in &program.instructions {
            match *instruction {
                Instruction::Push(value) => {
                    self.push(value);
                }
                Instruction::Apply(op) => {
                    self.perform(op);
                }
            }
            if self.trace_mode {
                self.print_trace(instruction);
            }
        }
        self.top()
    }

    /// Lex, parse and run `input`.
    ///
    /// The whole input is parsed before anything runs, so on error the stack
    /// is left as it was.
    pub fn eval(&mut self, input: &str) -> Result<Option<Complex64>, CalcError> {
        let program = parse(lex(input)?)?;
        Ok(self.run(&program))
    }

    fn print_trace(&self, instruction: &Instruction) {
        let top = self
            .top()
            .map(|z| format_value(z, DEFAULT_PRECISION))
            .unwrap_or_else(|| "-".to_string());
        eprintln!(
            "[trace] {} -> {} ({})",
            instruction,
            top,
            format_status(&self.stack)
        );
    }
}
