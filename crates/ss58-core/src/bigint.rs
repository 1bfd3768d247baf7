//! Arbitrary-precision radix conversion for the primary backend.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Bytes -> base-58 digit values, most significant first.
pub(crate) fn to_base58_digits(bytes: &[u8]) -> Vec<u8> {
    let mut num = BigUint::from_bytes_be(bytes);
    let base = BigUint::from(58u8);
    let mut digits = Vec::with_capacity(bytes.len() * 138 / 100 + 1);

    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base);
        let digit = remainder.to_u64_digits().first().copied().unwrap_or(0);
        digits.push(digit as u8);
        num = quotient;
    }

    digits.reverse();
    digits
}

/// Base-58 digit values, most significant first -> minimal big-endian bytes.
pub(crate) fn from_base58_digits(digits: &[u8]) -> Vec<u8> {
    let mut num = BigUint::zero();
    for &digit in digits {
        num *= 58u32;
        num += digit as u32;
    }

    // `to_bytes_be` renders zero as a single 0x00.
    if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    }
}
