/// Arbitrary-precision signed integers.
///
/// Declares [`big_int::BigInt`], the only value type the evaluator produces.
/// It supports exact addition, subtraction, multiplication, truncating
/// division and remainder, comparison, negation, and decimal text conversion.
pub mod big_int;
/// Carry, borrow and long-division routines on unsigned limb slices.
mod magnitude;
