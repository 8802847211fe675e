//! Token recognition for calcr
//!
//! Tokens are the atomic elements of an arithmetic expression: numeric
//! literals, the four binary operators, and parentheses. There is no token
//! list: the evaluator asks for one token at a time and consumes it before
//! asking for the next, so a token only ever exists between two scan steps.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, one_of},
    combinator::{map, value},
    IResult,
};

use crate::eval::EvalError;

/// A single scanned token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// One of the four binary operators: + - * /
    Operator(char),
    /// Opening parenthesis
    OpenParen,
    /// Closing parenthesis
    CloseParen,
}

/// Recognize the maximal run of digits and decimal points
fn number_run(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || c == '.')(input)
}

/// Recognize a binary operator
fn operator(input: &str) -> IResult<&str, Token> {
    map(one_of("+-*/"), Token::Operator)(input)
}

/// Recognize a parenthesis
fn paren(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::OpenParen, char('(')),
        value(Token::CloseParen, char(')')),
    ))(input)
}

/// Scan the next token, skipping leading whitespace.
///
/// Returns the token together with the input that remains after it, or
/// `None` once the input is exhausted. A digit run that does not parse as a
/// float fails with `InvalidNumber`; a character that matches no token form
/// fails with `InvalidCharacter`.
pub fn next_token(input: &str) -> Result<Option<(Token, &str)>, EvalError> {
    let input = input.trim_start();
    if input.is_empty() {
        return Ok(None);
    }

    // A number run is recognized as raw text first so that a malformed run
    // like `3..4` is reported as a bad number, not a stray character.
    if let Ok((rest, run)) = number_run(input) {
        let num = run
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumber(run.to_string()))?;
        return Ok(Some((Token::Number(num), rest)));
    }

    if let Ok((rest, token)) = alt((operator, paren))(input) {
        return Ok(Some((token, rest)));
    }

    Err(EvalError::InvalidCharacter(input.chars().next().unwrap()))
}
