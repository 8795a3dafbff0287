use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Division by zero at position {}.", .position + 1)]
    DivisionByZero {
        /// Cursor position just past the zero divisor.
        position: usize,
    },
    /// A literal value was too large to be represented as a machine integer.
    #[error("Literal at position {} is too large.", .position + 1)]
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// Tried to access a matrix element outside its dimensions.
    #[error("Index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix.")]
    IndexOutOfBounds {
        /// The requested row.
        row:  usize,
        /// The requested column.
        col:  usize,
        /// Number of rows available.
        rows: usize,
        /// Number of columns available.
        cols: usize,
    },
    /// Arithmetic operation overflowed a machine integer.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
    /// An argument was malformed or inconsistent.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}
