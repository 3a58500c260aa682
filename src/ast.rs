//! Program representation for rpnc
//!
//! A program is a flat list of instructions: push a value, or apply an
//! operation to the stack.

use crate::display::format_value;
use crate::ops::Operation;
use num_complex::Complex64;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Push a value onto the stack
    Push(Complex64),
    /// Apply an operation to the stack
    Apply(Operation),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(value) => f.write_str(&format_value(*value, 17)),
            Instruction::Apply(op) => write!(f, "{}", op),
        }
    }
}

/// A parsed program
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
