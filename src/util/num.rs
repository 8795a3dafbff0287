use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::value::big_int::BigInt,
};

/// Narrows a [`BigInt`] to an `i64` if and only if it fits.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` if the value is outside the `i64`
/// range.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `position`: Source offset for error reporting.
///
/// ## Example
/// ```
/// use longcalc::{
///     error::RuntimeError,
///     interpreter::value::big_int::BigInt,
///     util::num::big_int_to_i64_checked,
/// };
///
/// assert_eq!(big_int_to_i64_checked(&BigInt::from(-42), 0).unwrap(), -42);
///
/// let huge: BigInt = "9223372036854775808".parse().unwrap();
/// let err = big_int_to_i64_checked(&huge, 7).unwrap_err();
/// assert!(matches!(err, RuntimeError::LiteralTooLarge { position: 7 }));
/// ```
pub fn big_int_to_i64_checked(value: &BigInt, position: usize) -> EvalResult<i64> {
    value.to_i64().ok_or(RuntimeError::LiteralTooLarge { position })
}

/// Parses a run of ASCII digits into an `i64`, with no sign allowed.
///
/// ## Errors
/// - `RuntimeError::InvalidArgument` if `digits` is empty or contains
///   anything but `0`-`9`.
/// - `RuntimeError::LiteralTooLarge` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use longcalc::{error::RuntimeError, util::num::digits_to_i64_checked};
///
/// assert_eq!(digits_to_i64_checked("0042", 0).unwrap(), 42);
/// assert!(matches!(digits_to_i64_checked("99999999999999999999", 3),
///                  Err(RuntimeError::LiteralTooLarge { position: 3 })));
/// ```
pub fn digits_to_i64_checked(digits: &str, position: usize) -> EvalResult<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RuntimeError::InvalidArgument { details: format!("'{digits}' is not a number") });
    }

    let mut value = BigInt::default();
    for byte in digits.bytes() {
        value.push_digit(byte - b'0');
    }
    big_int_to_i64_checked(&value, position)
}

/// Multiplies two `i64` values, reporting overflow as an error.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the product does not fit in an `i64`.
pub fn i64_mul_checked(left: i64, right: i64) -> EvalResult<i64> {
    left.checked_mul(right).ok_or(RuntimeError::Overflow)
}
