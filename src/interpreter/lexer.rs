use std::fmt;

use logos::Logos;
use num_traits::Zero;

use crate::interpreter::value::big_int::BigInt;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Only the space character separates tokens. Anything the lexer does not
/// recognize, including tabs and parentheses, is reported as an error.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r" +")]
pub enum Token {
    /// Unsigned integer literal tokens of any length, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
        }
    }
}

/// What the evaluator sees when it asks for the next token.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Lexeme {
    /// A recognized token.
    Token(Token),
    /// The input is exhausted.
    End,
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => write!(f, "{token}"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Builds an integer literal from the current token slice.
///
/// The value is accumulated one digit at a time, so literals of any length
/// are exact.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(BigInt)`: The literal's value. The regex only admits ASCII digits.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    let mut value = BigInt::zero();
    for byte in lex.slice().bytes() {
        value.push_digit(byte - b'0');
    }
    Some(value)
}
