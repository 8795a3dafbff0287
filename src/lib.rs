//! # longcalc
//!
//! longcalc is an arbitrary-precision integer calculator written in Rust.
//! It evaluates expressions built from integer literals, `+`, `-`, `*`, `/`
//! and unary minus with a recursive-descent evaluator, and performs every
//! operation on its own unbounded [`BigInt`](interpreter::value::big_int::BigInt)
//! type, so results never overflow.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::{CalcResult, Calculator},
    value::big_int::BigInt,
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or evaluating an expression, and by the support utilities. Every error
/// that refers to the input carries the cursor position where it happened.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, runtime).
/// - Maps failures to the exit codes used by the command-line tool.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// Evaluates arithmetic expressions over unbounded integers.
///
/// This module ties together the lexer, the recursive-descent evaluator and
/// the big-integer value type.
///
/// # Responsibilities
/// - Converts the input into tokens lazily, one at a time.
/// - Evaluates the grammar directly, without building a syntax tree.
/// - Performs exact arithmetic on arbitrarily large integers.
pub mod interpreter;
/// General utilities that sit beside the evaluator.
///
/// This module provides checked numeric conversions and small standalone
/// building blocks: a linear arena allocator, a whitespace word scanner and a
/// dense integer matrix.
///
/// # Responsibilities
/// - Safely convert between `BigInt` and `i64` without silent data loss.
/// - Provide general utility types that do not depend on the evaluator.
pub mod util;

/// Evaluates a single expression with a fresh [`Calculator`].
///
/// # Errors
/// Returns an error if the expression is malformed or divides by zero.
///
/// # Examples
/// ```
/// use longcalc::evaluate;
///
/// let result = evaluate("-515/219*  140").unwrap();
/// assert_eq!(result.to_string(), "-280");
///
/// assert!(evaluate("10 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> CalcResult<BigInt> {
    Calculator::new().process(expression)
}
