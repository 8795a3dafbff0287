use logos::{Lexer, Logos};

use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        lexer::{Lexeme, Token},
        value::big_int::BigInt,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`CalcError`] describing why the current `process` call stopped.
pub type CalcResult<T> = Result<T, CalcError>;

/// A reusable expression evaluator.
///
/// `Calculator` evaluates one expression per [`Calculator::process`] call and
/// remembers where the cursor stopped, so callers can point at the failing
/// column after a syntax error. Nothing else survives between calls.
///
/// ## Usage
///
/// ```
/// use longcalc::{error::CalcError, interpreter::evaluator::core::Calculator};
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.process("2 + 3 * 4 - -2").unwrap().to_string(), "16");
///
/// assert!(matches!(calc.process("2 +"), Err(CalcError::Syntax(_))));
/// assert_eq!(calc.position(), 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    position: usize,
}

impl Calculator {
    /// Creates a calculator with the cursor at the start.
    #[must_use]
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Evaluates `expression` and returns its exact value.
    ///
    /// All state is reset on entry. The whole input must match the grammar
    /// `expr := term (('+' | '-') term)*`, `term := factor (('*' | '/')
    /// factor)*`, `factor := '-'? NUMBER`, with spaces allowed between
    /// tokens. Division truncates toward zero.
    ///
    /// # Errors
    /// - [`CalcError::Syntax`] for malformed or incomplete input.
    /// - [`CalcError::Runtime`] with `DivisionByZero` when a divisor is zero.
    ///
    /// Either way [`Calculator::position`] then reports where parsing
    /// stopped.
    pub fn process(&mut self, expression: &str) -> CalcResult<BigInt> {
        let mut session = Session::new(expression);
        let outcome = session.process_low_precedence();
        self.position = session.position;
        outcome
    }

    /// Zero-based byte offset of the cursor when the last `process` call
    /// returned.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// State of a single `process` call.
///
/// Tokens are pulled from the source on demand. A token read by a rule that
/// does not own it goes back into the one-slot `lookahead` so the enclosing
/// rule sees it next.
pub(crate) struct Session<'src> {
    lexer:               Lexer<'src, Token>,
    lookahead:           Option<Lexeme>,
    pub(crate) position: usize,
}

impl<'src> Session<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self { lexer:     Token::lexer(source),
               lookahead: None,
               position:  0, }
    }

    /// Returns the pushed-back token if there is one, otherwise scans the
    /// next token from the source and moves the cursor past it.
    pub(crate) fn next_token(&mut self) -> CalcResult<Lexeme> {
        if let Some(lexeme) = self.lookahead.take() {
            return Ok(lexeme);
        }

        match self.lexer.next() {
            Some(Ok(token)) => {
                self.position = self.lexer.span().end;
                Ok(Lexeme::Token(token))
            },
            Some(Err(())) => {
                self.position = self.lexer.span().start;
                let character = self.lexer.slice().chars().next().unwrap_or_default();
                Err(ParseError::UnexpectedCharacter { character,
                                                      position: self.position, }.into())
            },
            None => {
                self.position = self.lexer.source().len();
                Ok(Lexeme::End)
            },
        }
    }

    /// Returns a token to the stream. At most one token may be pending.
    pub(crate) fn push_back(&mut self, lexeme: Lexeme) {
        debug_assert!(self.lookahead.is_none(), "lookahead slot already holds a token");
        self.lookahead = Some(lexeme);
    }

    /// Builds the syntax error for a token that is not valid here.
    pub(crate) fn unexpected(&self, lexeme: &Lexeme) -> CalcError {
        match lexeme {
            Lexeme::End => ParseError::UnexpectedEndOfInput { position: self.position }.into(),
            Lexeme::Token(token) => ParseError::UnexpectedToken { token:    token.to_string(),
                                                                  position: self.position, }.into(),
        }
    }
}
