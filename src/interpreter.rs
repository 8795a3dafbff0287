/// The evaluator module turns tokens directly into values.
///
/// There is no syntax tree. Each grammar rule is a method that pulls the
/// tokens it needs, computes its value immediately and hands back the first
/// token it cannot use.
///
/// # Responsibilities
/// - Enforces operator precedence and left associativity.
/// - Checks divisors before dividing.
/// - Tracks the cursor so failures can point at a column.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source and produces integer literals and the four
/// operator tokens on demand. Spaces are skipped; every other unknown
/// character is an error.
pub mod lexer;
/// The value module defines the numeric type used during evaluation.
///
/// Every literal and intermediate result is a [`value::big_int::BigInt`], so
/// no expression can overflow.
pub mod value;
