//! Tokenization for rpnc
//!
//! Input is a whitespace-separated sequence of numbers and words. Numbers
//! may be real (`2`, `-1.5e3`), imaginary (`4i`, `-i`) or complex
//! (`3+4i`, `1-i`). Everything that is not a number is a word.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit0, digit1, multispace0, multispace1, one_of},
    combinator::{eof, map, map_res, opt, peek, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};
use num_complex::Complex64;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(Complex64),
    /// An operation word
    Word(String),
}

#[derive(Error, Debug)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Recognize the text of a float: `2`, `-1.5`, `.5`, `3e-2`.
///
/// An exponent without digits (`1e`, `3e+`) is not consumed, so such a
/// token falls through to a word rather than failing the whole lex.
fn float_text(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// Parse a float such as `2`, `-1.5` or `3e-2`
fn float(input: &str) -> IResult<&str, f64> {
    map_res(float_text, str::parse::<f64>)(input)
}

/// Parse a float that must start with an explicit sign
fn signed_float(input: &str) -> IResult<&str, f64> {
    preceded(peek(one_of("+-")), float)(input)
}

/// Parse a bare imaginary unit with optional sign: `i`, `+i`, `-i`
fn unit(input: &str) -> IResult<&str, f64> {
    map(pair(opt(one_of("+-")), char('i')), |(sign, _)| {
        if sign == Some('-') {
            -1.0
        } else {
            1.0
        }
    })(input)
}

/// Parse a signed bare imaginary unit: `+i`, `-i`
fn signed_unit(input: &str) -> IResult<&str, f64> {
    preceded(peek(one_of("+-")), unit)(input)
}

/// Parse `re+imi` / `re-imi`
fn complex(input: &str) -> IResult<&str, Complex64> {
    map(
        tuple((
            float,
            alt((terminated(signed_float, char('i')), signed_unit)),
        )),
        |(re, im)| Complex64::new(re, im),
    )(input)
}

/// Parse `4i`, `-2.5i`, `i`, `-i`
fn imaginary(input: &str) -> IResult<&str, Complex64> {
    map(
        alt((terminated(float, char('i')), unit)),
        |im| Complex64::new(0.0, im),
    )(input)
}

fn real(input: &str) -> IResult<&str, Complex64> {
    map(float, |re| Complex64::new(re, 0.0))(input)
}

/// Succeeds without consuming when the next character ends a token
fn end_of_token(input: &str) -> IResult<&str, &str> {
    peek(alt((multispace1, eof)))(input)
}

/// Parse a numeric literal that spans the whole token
fn number(input: &str) -> IResult<&str, Token> {
    alt((
        terminated(complex, end_of_token),
        terminated(imaginary, end_of_token),
        terminated(real, end_of_token),
    ))(input)
    .map(|(rest, value)| (rest, Token::Number(value)))
}

/// Parse a word (operation name)
fn word(input: &str) -> IResult<&str, Token> {
    map(take_while1(|c: char| !c.is_whitespace()), |s: &str| {
        Token::Word(s.to_string())
    })(input)
}

/// Parse any single token
fn token(input: &str) -> IResult<&str, Token> {
    preceded(multispace0, alt((number, word)))(input)
}

/// Strip comments (# to end of line)
fn strip_comments(input: &str) -> String {
    input
        .lines()
        .map(|line| match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn first_token(input: &str) -> &str {
    input.split_whitespace().next().unwrap_or("")
}

/// Tokenize a line (or several lines) of input
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let input = strip_comments(input);

    let (remaining, tokens) = many0(token)(&input).map_err(|e| match e {
        nom::Err::Error(err) | nom::Err::Failure(err) => {
            LexError::ParseError(format!("cannot read '{}'", first_token(err.input)))
        }
        nom::Err::Incomplete(_) => LexError::ParseError("incomplete input".to_string()),
    })?;

    let remaining = remaining.trim();
    if let Some(c) = remaining.chars().next() {
        return Err(LexError::UnexpectedChar(c));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(re: f64, im: f64) -> Token {
        Token::Number(Complex64::new(re, im))
    }

    fn word_token(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn tokenize_reals() {
        let tokens = lex("2 -1.5 1e3 .5").unwrap();
        assert_eq!(
            tokens,
            vec![num(2.0, 0.0), num(-1.5, 0.0), num(1000.0, 0.0), num(0.5, 0.0)]
        );
    }

    #[test]
    fn tokenize_imaginary() {
        let tokens = lex("4i -2.5i i -i").unwrap();
        assert_eq!(
            tokens,
            vec![num(0.0, 4.0), num(0.0, -2.5), num(0.0, 1.0), num(0.0, -1.0)]
        );
    }

    #[test]
    fn tokenize_complex() {
        let tokens = lex("3+4i 1.5-2i 2+i 2-i").unwrap();
        assert_eq!(
            tokens,
            vec![num(3.0, 4.0), num(1.5, -2.0), num(2.0, 1.0), num(2.0, -1.0)]
        );
    }

    #[test]
    fn tokenize_operator_words() {
        let tokens = lex("2 3 + - * / ^ sqrt").unwrap();
        assert_eq!(
            tokens,
            vec![
                num(2.0, 0.0),
                num(3.0, 0.0),
                word_token("+"),
                word_token("-"),
                word_token("*"),
                word_token("/"),
                word_token("^"),
                word_token("sqrt"),
            ]
        );
    }

    #[test]
    fn words_starting_with_i_are_not_numbers() {
        let tokens = lex("inv im").unwrap();
        assert_eq!(tokens, vec![word_token("inv"), word_token("im")]);
    }

    #[test]
    fn number_glued_to_text_is_a_word() {
        let tokens = lex("3+4 1/x").unwrap();
        assert_eq!(tokens, vec![word_token("3+4"), word_token("1/x")]);
    }

    #[test]
    fn dangling_exponent_is_a_word() {
        let tokens = lex("1e 2 3e+ +").unwrap();
        assert_eq!(
            tokens,
            vec![word_token("1e"), num(2.0, 0.0), word_token("3e+"), word_token("+")]
        );
    }

    #[test]
    fn exponent_forms() {
        let tokens = lex("1E2 2.5e-1 1.").unwrap();
        assert_eq!(tokens, vec![num(100.0, 0.0), num(0.25, 0.0), num(1.0, 0.0)]);
    }

    #[test]
    fn comments_are_ignored() {
        let tokens = lex("1 2 + # add them\n3 *").unwrap();
        assert_eq!(
            tokens,
            vec![num(1.0, 0.0), num(2.0, 0.0), word_token("+"), num(3.0, 0.0), word_token("*")]
        );
    }

    #[test]
    fn empty_input() {
        assert!(lex("   ").unwrap().is_empty());
        assert!(lex("# only a comment").unwrap().is_empty());
    }
}
