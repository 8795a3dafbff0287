//! Limb arithmetic on unsigned magnitudes.
//!
//! A magnitude is a little-endian slice of limbs in base [`BASE`]. Every
//! function here expects trimmed input (no most-significant zero limbs, zero
//! is `[0]`) and returns trimmed output.

#![allow(clippy::cast_possible_truncation)]

use std::cmp::Ordering;

/// Radix of a single limb. A power of ten keeps decimal formatting trivial.
pub const BASE: u32 = 1_000_000_000;
/// Number of decimal digits stored in one limb.
pub const BASE_DIGITS: usize = 9;

const BASE_U64: u64 = BASE as u64;

/// Removes most-significant zero limbs, keeping a single `0` for zero.
pub fn trim(limbs: &mut Vec<u32>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

/// Returns `true` when the magnitude is the canonical zero.
pub fn is_zero(limbs: &[u32]) -> bool {
    limbs == [0]
}

/// Splits a machine integer into limbs.
pub fn from_u128(mut value: u128) -> Vec<u32> {
    let mut limbs = Vec::with_capacity(5);
    loop {
        limbs.push((value % u128::from(BASE)) as u32);
        value /= u128::from(BASE);
        if value == 0 {
            return limbs;
        }
    }
}

/// Joins limbs back into a machine integer, or `None` if it does not fit.
pub fn to_u128(limbs: &[u32]) -> Option<u128> {
    limbs.iter()
         .rev()
         .try_fold(0u128, |acc, &limb| acc.checked_mul(u128::from(BASE))?.checked_add(u128::from(limb)))
}

/// Compares two magnitudes.
pub fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Long addition with carry propagation.
pub fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;

    for (i, &limb) in long.iter().enumerate() {
        let mut digit = limb + short.get(i).copied().unwrap_or(0) + carry;
        carry = u32::from(digit >= BASE);
        if carry == 1 {
            digit -= BASE;
        }
        sum.push(digit);
    }
    if carry > 0 {
        sum.push(carry);
    }
    sum
}

/// Long subtraction with borrow propagation. Requires `a >= b`.
pub fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction would underflow");

    let mut difference = Vec::with_capacity(a.len());
    let mut borrow = 0;

    for (i, &limb) in a.iter().enumerate() {
        let subtrahend = b.get(i).copied().unwrap_or(0) + borrow;
        if limb >= subtrahend {
            difference.push(limb - subtrahend);
            borrow = 0;
        } else {
            difference.push(limb + BASE - subtrahend);
            borrow = 1;
        }
    }
    trim(&mut difference);
    difference
}

/// Schoolbook long multiplication.
pub fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }

    let mut product = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            // Fits: (BASE - 1)^2 + 2 * (BASE - 1) < u64::MAX.
            let current = u64::from(product[i + j]) + u64::from(x) * u64::from(y) + carry;
            product[i + j] = (current % BASE_U64) as u32;
            carry = current / BASE_U64;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let current = u64::from(product[k]) + carry;
            product[k] = (current % BASE_U64) as u32;
            carry = current / BASE_U64;
            k += 1;
        }
    }
    trim(&mut product);
    product
}

/// Computes `a * factor + addend` for a single-limb factor and addend.
pub fn mul_add_small(a: &[u32], factor: u32, addend: u32) -> Vec<u32> {
    let mut result = Vec::with_capacity(a.len() + 1);
    let mut carry = u64::from(addend);

    for &limb in a {
        let current = u64::from(limb) * u64::from(factor) + carry;
        result.push((current % BASE_U64) as u32);
        carry = current / BASE_U64;
    }
    while carry > 0 {
        result.push((carry % BASE_U64) as u32);
        carry /= BASE_U64;
    }
    trim(&mut result);
    result
}

/// Divides by a single non-zero limb, returning quotient and remainder.
fn div_rem_small(a: &[u32], divisor: u32) -> (Vec<u32>, u32) {
    let mut quotient = vec![0u32; a.len()];
    let mut remainder = 0u64;

    for (i, &limb) in a.iter().enumerate().rev() {
        let current = remainder * BASE_U64 + u64::from(limb);
        quotient[i] = (current / u64::from(divisor)) as u32;
        remainder = current % u64::from(divisor);
    }
    trim(&mut quotient);
    (quotient, remainder as u32)
}

/// Long division. Requires a non-zero divisor.
///
/// Walks the dividend from its most significant limb, shifting each limb
/// into a running remainder and picking the largest quotient limb `q` with
/// `divisor * q <= remainder` by bisection over `0..BASE`.
pub fn div_rem(a: &[u32], divisor: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!is_zero(divisor), "magnitude division by zero");

    if cmp(a, divisor) == Ordering::Less {
        return (vec![0], a.to_vec());
    }
    if let [single] = divisor {
        let (quotient, remainder) = div_rem_small(a, *single);
        return (quotient, vec![remainder]);
    }

    let mut quotient = vec![0u32; a.len()];
    let mut remainder = vec![0u32];

    for (i, &limb) in a.iter().enumerate().rev() {
        remainder.insert(0, limb);
        trim(&mut remainder);

        let (mut low, mut high) = (0u32, BASE - 1);
        while low < high {
            let mid = low + (high - low).div_ceil(2);
            if cmp(&mul_add_small(divisor, mid, 0), &remainder) == Ordering::Greater {
                high = mid - 1;
            } else {
                low = mid;
            }
        }

        if low > 0 {
            remainder = sub(&remainder, &mul_add_small(divisor, low, 0));
        }
        quotient[i] = low;
    }
    trim(&mut quotient);
    (quotient, remainder)
}
