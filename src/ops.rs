//! Calculator operations
//!
//! The operation set is closed. Every operation has a fixed arity, a key
//! code (the number a keymap binding sends for it), and one or more words
//! used by the text front end.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("Unknown operation code: {0}")]
    UnknownCode(u8),
    #[error("Unknown operation: {0}")]
    UnknownName(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operation {
    Drop = 0,
    Add = 1,
    Subtract = 2,
    Multiply = 3,
    Divide = 4,
    Negate = 5,
    Invert = 6,
    SquareRoot = 7,
    Log10 = 8,
    Power = 9,
    Sine = 10,
    ArcSine = 11,
    ExtractReal = 12,
    ExtractImaginary = 13,
}

impl Operation {
    /// Every operation, in key code order
    pub const ALL: [Operation; 14] = [
        Operation::Drop,
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Negate,
        Operation::Invert,
        Operation::SquareRoot,
        Operation::Log10,
        Operation::Power,
        Operation::Sine,
        Operation::ArcSine,
        Operation::ExtractReal,
        Operation::ExtractImaginary,
    ];

    /// Number of stack arguments the operation consumes
    pub const fn arity(self) -> usize {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => 2,
            Operation::Drop
            | Operation::Negate
            | Operation::Invert
            | Operation::SquareRoot
            | Operation::Log10
            | Operation::Sine
            | Operation::ArcSine
            | Operation::ExtractReal
            | Operation::ExtractImaginary => 1,
        }
    }

    /// Key code sent by a keymap binding for this operation
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Words accepted by the parser; the first one is canonical
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Operation::Drop => &["drop"],
            Operation::Add => &["+", "add"],
            Operation::Subtract => &["-", "sub"],
            Operation::Multiply => &["*", "mul"],
            Operation::Divide => &["/", "div"],
            Operation::Negate => &["neg", "chs"],
            Operation::Invert => &["inv", "1/x"],
            Operation::SquareRoot => &["sqrt"],
            Operation::Log10 => &["log", "log10"],
            Operation::Power => &["^", "pow"],
            Operation::Sine => &["sin"],
            Operation::ArcSine => &["asin"],
            Operation::ExtractReal => &["re"],
            Operation::ExtractImaginary => &["im"],
        }
    }

    pub fn name(self) -> &'static str {
        self.words()[0]
    }

    /// One-line description for help output
    pub fn describe(self) -> &'static str {
        match self {
            Operation::Drop => "re-push the top value",
            Operation::Add => "a + b",
            Operation::Subtract => "a - b",
            Operation::Multiply => "a * b",
            Operation::Divide => "a / b",
            Operation::Negate => "-a",
            Operation::Invert => "1 / a",
            Operation::SquareRoot => "principal square root",
            Operation::Log10 => "base-10 logarithm",
            Operation::Power => "a raised to b",
            Operation::Sine => "sine",
            Operation::ArcSine => "arcsine",
            Operation::ExtractReal => "real part",
            Operation::ExtractImaginary => "imaginary part",
        }
    }
}

impl TryFrom<u8> for Operation {
    type Error = OperationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Operation::ALL
            .get(code as usize)
            .copied()
            .ok_or(OperationError::UnknownCode(code))
    }
}

impl FromStr for Operation {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.words().contains(&lower.as_str()))
            .ok_or_else(|| OperationError::UnknownName(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
