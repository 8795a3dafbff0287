/// Core evaluation state.
///
/// Declares the public [`core::Calculator`], the per-call session with its
/// lazy token stream and one-slot lookahead, and the shared result type.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the two precedence levels: `+`/`-` and `*`/`/`, including the
/// divide-by-zero check.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles numeric literals and the unary minus that may prefix them.
pub mod unary;
