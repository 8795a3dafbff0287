use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing an
/// expression: unexpected tokens, unknown characters and premature end of
/// input. Each carries the cursor position where parsing stopped.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised once the input is
/// syntactically valid: division by zero, literals that do not fit a machine
/// integer, out-of-range matrix access and overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type for operations that can only fail at runtime.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Exit code reported for syntax errors.
pub const EXIT_SYNTAX_ERROR: u8 = 1;
/// Exit code reported for division by zero.
pub const EXIT_DIVISION_BY_ZERO: u8 = 2;
/// Exit code reported for every other failure.
pub const EXIT_OTHER_ERROR: u8 = 3;

/// Any failure of a single `process` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The input does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] ParseError),
    /// The input parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Returns the cursor position the failure refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax(err) => err.position(),
            Self::Runtime(RuntimeError::DivisionByZero { position }
                          | RuntimeError::LiteralTooLarge { position }) => Some(*position),
            Self::Runtime(_) => None,
        }
    }

    /// Maps the failure to a process exit code.
    ///
    /// # Example
    /// ```
    /// use longcalc::error::{CalcError, ParseError, RuntimeError};
    ///
    /// let syntax = CalcError::from(ParseError::UnexpectedEndOfInput { position: 0 });
    /// let zero = CalcError::from(RuntimeError::DivisionByZero { position: 4 });
    /// assert_eq!(syntax.exit_code(), 1);
    /// assert_eq!(zero.exit_code(), 2);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Syntax(_) => EXIT_SYNTAX_ERROR,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => EXIT_DIVISION_BY_ZERO,
            Self::Runtime(_) => EXIT_OTHER_ERROR,
        }
    }
}
