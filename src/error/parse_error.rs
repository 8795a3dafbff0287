use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every positional variant carries a zero-based byte offset into the source.
/// The rendered message reports it as a one-based column.
pub enum ParseError {
    /// Found a token that is not valid at this point of the grammar.
    #[error("Syntax error at position {}: Unexpected token '{token}'.", .position + 1)]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Cursor position when the token was rejected.
        position: usize,
    },
    /// Reached the end of input where an operand or operator was required.
    #[error("Syntax error at position {}: Unexpected end of input.", .position + 1)]
    UnexpectedEndOfInput {
        /// Cursor position, equal to the input length.
        position: usize,
    },
    /// A character that does not start any token.
    #[error("Syntax error at position {}: Unexpected character '{character}'.", .position + 1)]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Position of the character itself.
        position:  usize,
    },
    /// A unary minus was not directly followed by an unsigned number.
    #[error("Syntax error at position {}: Expected a number after '-', found '{token}'.",
            .position + 1)]
    ExpectedNumber {
        /// What followed the minus sign.
        token:    String,
        /// Cursor position after the rejected token.
        position: usize,
    },
    /// A radix outside `2..=36` was requested.
    #[error("Radix {radix} is not supported; expected 2 through 36.")]
    InvalidRadix {
        /// The requested radix.
        radix: u32,
    },
}

impl ParseError {
    /// Returns the source position attached to this error, if any.
    ///
    /// # Example
    /// ```
    /// use longcalc::error::ParseError;
    ///
    /// let err = ParseError::UnexpectedEndOfInput { position: 3 };
    /// assert_eq!(err.position(), Some(3));
    /// assert_eq!(err.to_string(), "Syntax error at position 4: Unexpected end of input.");
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedCharacter { position, .. }
            | Self::ExpectedNumber { position, .. } => Some(*position),
            Self::InvalidRadix { .. } => None,
        }
    }
}
