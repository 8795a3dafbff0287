use num_traits::Zero;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{CalcResult, Session},
        lexer::{Lexeme, Token},
        value::big_int::BigInt,
    },
};

impl Session<'_> {
    /// Evaluates addition and subtraction.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// Operands are folded left to right. This is the outermost rule, so it
    /// is also where the input must end: any token other than `+`, `-` or the
    /// end of input is a syntax error.
    pub(crate) fn process_low_precedence(&mut self) -> CalcResult<BigInt> {
        let mut result = self.process_high_precedence()?;
        loop {
            match self.next_token()? {
                Lexeme::Token(Token::Plus) => result += self.process_high_precedence()?,
                Lexeme::Token(Token::Minus) => result -= self.process_high_precedence()?,
                Lexeme::End => return Ok(result),
                other => return Err(self.unexpected(&other)),
            }
        }
    }

    /// Evaluates multiplication and truncating division.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    ///
    /// The divisor is evaluated first and checked for zero before dividing.
    /// The first token that is neither `*` nor `/` is pushed back for
    /// [`Session::process_low_precedence`] to consume.
    pub(crate) fn process_high_precedence(&mut self) -> CalcResult<BigInt> {
        let mut result = self.process_factor()?;
        loop {
            match self.next_token()? {
                Lexeme::Token(Token::Star) => result *= self.process_factor()?,
                Lexeme::Token(Token::Slash) => {
                    let divisor = self.process_factor()?;
                    if divisor.is_zero() {
                        return Err(RuntimeError::DivisionByZero { position: self.position }.into());
                    }
                    result /= divisor;
                },
                other => {
                    self.push_back(other);
                    return Ok(result);
                },
            }
        }
    }
}
