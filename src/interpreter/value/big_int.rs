use std::{
    cmp::Ordering,
    fmt::{self, Write},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};

use num_traits::{Num, One, Signed, Zero};

use crate::{
    error::ParseError,
    interpreter::value::magnitude::{self, BASE_DIGITS},
};

/// An arbitrary-precision signed integer.
///
/// The value is stored as a sign flag plus a little-endian sequence of
/// base 10⁹ limbs. Every constructor and operator returns the canonical form:
/// no most-significant zero limbs, and zero is a single zero limb that is
/// never negative. Structural equality is therefore numeric equality.
///
/// All arithmetic is exact. Division truncates toward zero, and the
/// remainder takes the sign of the dividend, matching Rust's primitive
/// integers.
///
/// # Example
/// ```
/// use longcalc::interpreter::value::big_int::BigInt;
///
/// let a: BigInt = "123456789012345678901234567890".parse().unwrap();
/// let b = BigInt::from(-10);
///
/// assert_eq!((&a * &b).to_string(), "-1234567890123456789012345678900");
/// assert_eq!((BigInt::from(-5) / BigInt::from(2)).to_string(), "-2");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    limbs:    Vec<u32>,
}

impl BigInt {
    /// Builds a value from raw parts and brings it into canonical form.
    fn from_parts(negative: bool, mut limbs: Vec<u32>) -> Self {
        magnitude::trim(&mut limbs);
        let negative = negative && !magnitude::is_zero(&limbs);
        Self { negative, limbs }
    }

    /// Appends one decimal digit: `self = self * 10 + digit`.
    ///
    /// This lets a scanner build a literal one character at a time without a
    /// separate parse step.
    ///
    /// # Example
    /// ```
    /// use longcalc::interpreter::value::big_int::BigInt;
    /// use num_traits::Zero;
    ///
    /// let mut value = BigInt::zero();
    /// for digit in [4, 0, 2] {
    ///     value.push_digit(digit);
    /// }
    /// assert_eq!(value, BigInt::from(402));
    /// ```
    pub fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit < 10, "not a decimal digit: {digit}");

        if self.negative {
            *self = &*self * &Self::from(10) + Self::from(u32::from(digit));
        } else {
            self.limbs = magnitude::mul_add_small(&self.limbs, 10, u32::from(digit));
        }
    }

    /// Narrows the value to an `i64`, or `None` if it does not fit.
    ///
    /// # Example
    /// ```
    /// use longcalc::interpreter::value::big_int::BigInt;
    ///
    /// assert_eq!(BigInt::from(i64::MIN).to_i64(), Some(i64::MIN));
    /// assert_eq!((BigInt::from(i64::MAX) + BigInt::from(1)).to_i64(), None);
    /// ```
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = i128::try_from(magnitude::to_u128(&self.limbs)?).ok()?;
        i64::try_from(if self.negative { -magnitude } else { magnitude }).ok()
    }

    /// Truncating division and remainder in one pass.
    ///
    /// Returns `None` when `rhs` is zero. Otherwise the quotient is rounded
    /// toward zero and the remainder has the sign of `self`, so
    /// `self == quotient * rhs + remainder` always holds.
    ///
    /// # Example
    /// ```
    /// use longcalc::interpreter::value::big_int::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    /// assert!(BigInt::from(1).div_rem(&BigInt::from(0)).is_none());
    /// ```
    #[must_use]
    pub fn div_rem(&self, rhs: &Self) -> Option<(Self, Self)> {
        if rhs.is_zero() {
            return None;
        }
        let (quotient, remainder) = magnitude::div_rem(&self.limbs, &rhs.limbs);
        Some((Self::from_parts(self.negative != rhs.negative, quotient),
              Self::from_parts(self.negative, remainder)))
    }

    /// Truncating division, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Truncating remainder, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    ///
    /// # Example
    /// ```
    /// use longcalc::interpreter::value::big_int::BigInt;
    ///
    /// assert_eq!(BigInt::from(0).digit_count(), 1);
    /// assert_eq!(BigInt::from(-1_000_000_000_i64).digit_count(), 10);
    /// ```
    #[must_use]
    pub fn digit_count(&self) -> usize {
        let top = self.limbs.last().copied().unwrap_or(0);
        let top_digits = top.checked_ilog10().map_or(1, |log| log as usize + 1);
        (self.limbs.len() - 1) * BASE_DIGITS + top_digits
    }

    fn parse_radix(src: &str, radix: u32) -> Result<Self, ParseError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseError::InvalidRadix { radix });
        }

        let (negative, digits) = match src.as_bytes().first() {
            Some(b'-') => (true, &src[1..]),
            Some(b'+') => (false, &src[1..]),
            _ => (false, src),
        };
        let offset = src.len() - digits.len();

        if digits.is_empty() {
            return Err(ParseError::UnexpectedEndOfInput { position: src.len() });
        }

        let mut limbs = vec![0];
        for (i, character) in digits.char_indices() {
            let digit = character.to_digit(radix)
                                 .ok_or(ParseError::UnexpectedCharacter { character,
                                                                          position: offset + i })?;
            limbs = magnitude::mul_add_small(&limbs, radix, digit);
        }

        Ok(Self::from_parts(negative, limbs))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_parts(value < 0,
                                 magnitude::from_u128(u128::from(value.unsigned_abs())))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInt {
            fn from(value: $t) -> Self {
                Self::from_parts(false, magnitude::from_u128(u128::from(value)))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * BASE_DIGITS);
        let mut limbs = self.limbs.iter().rev();

        if let Some(top) = limbs.next() {
            write!(digits, "{top}")?;
        }
        for limb in limbs {
            write!(digits, "{limb:0BASE_DIGITS$}")?;
        }

        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    /// Parses an optional sign followed by one or more decimal digits.
    ///
    /// # Example
    /// ```
    /// use longcalc::{error::ParseError, interpreter::value::big_int::BigInt};
    ///
    /// assert_eq!("-0042".parse::<BigInt>().unwrap().to_string(), "-42");
    /// assert_eq!("12x".parse::<BigInt>(),
    ///            Err(ParseError::UnexpectedCharacter { character: 'x',
    ///                                                  position:  2, }));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_radix(s, 10)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => magnitude::cmp(&self.limbs, &other.limbs),
            (true, true) => magnitude::cmp(&other.limbs, &self.limbs),
        }
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(!self.negative, self.limbs)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        BigInt::from_parts(!self.negative, self.limbs.clone())
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        if self.negative == rhs.negative {
            return BigInt::from_parts(self.negative, magnitude::add(&self.limbs, &rhs.limbs));
        }
        match magnitude::cmp(&self.limbs, &rhs.limbs) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                BigInt::from_parts(self.negative, magnitude::sub(&self.limbs, &rhs.limbs))
            },
            Ordering::Less => {
                BigInt::from_parts(rhs.negative, magnitude::sub(&rhs.limbs, &self.limbs))
            },
        }
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        BigInt::from_parts(self.negative != rhs.negative, magnitude::mul(&self.limbs, &rhs.limbs))
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero, like the primitive integer types.
    fn div(self, rhs: &BigInt) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|| panic!("attempt to divide by zero"))
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero, like the primitive integer types.
    fn rem(self, rhs: &BigInt) -> Self::Output {
        self.checked_rem(rhs)
            .unwrap_or_else(|| panic!("attempt to calculate the remainder with a divisor of zero"))
    }
}

/// Derives the owned and compound-assignment forms of an operator from its
/// `&BigInt op &BigInt` implementation.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = (&*self).$method(rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

impl Zero for BigInt {
    fn zero() -> Self {
        Self { negative: false,
               limbs:    vec![0], }
    }

    fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.limbs)
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self { negative: false,
               limbs:    vec![1], }
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseError;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Self::parse_radix(src, radix)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        Self::from_parts(false, self.limbs.clone())
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other { Self::zero() } else { self - other }
    }

    fn signum(&self) -> Self {
        match (self.is_zero(), self.negative) {
            (true, _) => Self::zero(),
            (false, true) => -Self::one(),
            (false, false) => Self::one(),
        }
    }

    fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    fn is_negative(&self) -> bool {
        self.negative
    }
}
