use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{CalcResult, Session},
        lexer::{Lexeme, Token},
        value::big_int::BigInt,
    },
};

impl Session<'_> {
    /// Evaluates a numeric literal with an optional unary minus.
    ///
    /// The rule is: `factor := "-" NUMBER | NUMBER`
    ///
    /// The minus binds only to the literal right after it. `--1` and `-*` are
    /// rejected rather than parsed as nested expressions.
    pub(crate) fn process_factor(&mut self) -> CalcResult<BigInt> {
        match self.next_token()? {
            Lexeme::Token(Token::Minus) => match self.next_token()? {
                Lexeme::Token(Token::Integer(value)) => Ok(-value),
                Lexeme::End => Err(self.unexpected(&Lexeme::End)),
                Lexeme::Token(other) => Err(ParseError::ExpectedNumber { token:    other.to_string(),
                                                                         position: self.position, }.into()),
            },
            Lexeme::Token(Token::Integer(value)) => Ok(value),
            other => Err(self.unexpected(&other)),
        }
    }
}
