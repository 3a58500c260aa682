//! Parser for rpnc
//!
//! Converts tokens into a Program. Numbers become pushes and words are
//! looked up in the operation table.

use crate::ast::{Instruction, Program};
use crate::lexer::Token;
use crate::ops::Operation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown word: {0}")]
    UnknownWord(String),
}

/// Parse tokens into a Program
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    let instructions = tokens
        .into_iter()
        .map(|token| match token {
            Token::Number(value) => Ok(Instruction::Push(value)),
            Token::Word(word) => word
                .parse::<Operation>()
                .map(Instruction::Apply)
                .map_err(|_| ParseError::UnknownWord(word)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Program::new(instructions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use num_complex::Complex64;

    fn parse_str(input: &str) -> Result<Program, ParseError> {
        parse(lex(input).expect("lex failed"))
    }

    #[test]
    fn parse_push_and_apply() {
        let program = parse_str("2 3 +").unwrap();
        assert_eq!(
            program.instructions,
            vec![
                Instruction::Push(Complex64::new(2.0, 0.0)),
                Instruction::Push(Complex64::new(3.0, 0.0)),
                Instruction::Apply(Operation::Add),
            ]
        );
    }

    #[test]
    fn parse_aliases() {
        let program = parse_str("chs pow LOG10").unwrap();
        assert_eq!(
            program.instructions,
            vec![
                Instruction::Apply(Operation::Negate),
                Instruction::Apply(Operation::Power),
                Instruction::Apply(Operation::Log10),
            ]
        );
    }

    #[test]
    fn parse_unknown_word() {
        let err = parse_str("2 cos").unwrap_err();
        assert!(matches!(err, ParseError::UnknownWord(ref w) if w == "cos"));
        assert_eq!(err.to_string(), "Unknown word: cos");
    }

    #[test]
    fn parse_empty() {
        assert!(parse_str("").unwrap().is_empty());
    }
}
