//! Decimal-string arithmetic for the fallback backend.
//!
//! Hosts without a native big-integer type can still hold an arbitrarily
//! large number as a string of decimal digits and operate on it one digit at
//! a time. Only single-digit-by-small-scalar operations are needed: multiply
//! and add while accumulating, divide with remainder while extracting digits.
//! Bytes enter through their hex representation and leave as nibble pairs.

use alloc::string::String;
use alloc::vec::Vec;

/// An unsigned integer held as ASCII decimal digits, most significant first.
///
/// Always normalized: no leading zeros except the single digit `"0"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalString(String);

impl DecimalString {
    /// The value `0`.
    pub fn zero() -> Self {
        DecimalString(String::from("0"))
    }

    /// Whether this is `0`.
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// The decimal digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `self = self * multiplier + addend`.
    pub fn mul_add(&mut self, multiplier: u32, addend: u32) {
        let mut reversed = Vec::with_capacity(self.0.len() + 4);
        let mut carry = addend as u64;

        for digit in self.0.bytes().rev() {
            let value = (digit - b'0') as u64 * multiplier as u64 + carry;
            reversed.push(b'0' + (value % 10) as u8);
            carry = value / 10;
        }
        while carry > 0 {
            reversed.push(b'0' + (carry % 10) as u8);
            carry /= 10;
        }

        self.0 = normalize(reversed.iter().rev().copied());
    }

    /// Long division by a small divisor, returning `(quotient, remainder)`.
    pub fn div_rem(&self, divisor: u32) -> (DecimalString, u32) {
        let mut quotient = Vec::with_capacity(self.0.len());
        let mut remainder = 0u64;

        for digit in self.0.bytes() {
            let current = remainder * 10 + (digit - b'0') as u64;
            quotient.push(b'0' + (current / divisor as u64) as u8);
            remainder = current % divisor as u64;
        }

        (DecimalString(normalize(quotient.into_iter())), remainder as u32)
    }

    /// Interpret `bytes` as a big-endian unsigned integer.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut value = DecimalString::zero();
        for nibble in hex::encode(bytes).chars() {
            value.mul_add(16, nibble.to_digit(16).unwrap_or(0));
        }
        value
    }

    /// Minimal big-endian bytes of this value; zero yields no bytes.
    ///
    /// An odd nibble count is padded with a leading zero nibble.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut nibbles = Vec::new();
        let mut value = self.clone();
        while !value.is_zero() {
            let (quotient, nibble) = value.div_rem(16);
            nibbles.push(nibble as u8);
            value = quotient;
        }
        if nibbles.len() % 2 == 1 {
            nibbles.push(0);
        }
        nibbles.reverse();

        nibbles.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect()
    }
}

fn normalize(digits: impl Iterator<Item = u8>) -> String {
    let trimmed: String = digits
        .skip_while(|&d| d == b'0')
        .map(char::from)
        .collect();
    if trimmed.is_empty() {
        String::from("0")
    } else {
        trimmed
    }
}

/// Bytes -> base-58 digit values, most significant first.
pub(crate) fn to_base58_digits(bytes: &[u8]) -> Vec<u8> {
    let mut value = DecimalString::from_bytes_be(bytes);
    let mut digits = Vec::with_capacity(bytes.len() * 138 / 100 + 1);

    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(58);
        digits.push(remainder as u8);
        value = quotient;
    }

    digits.reverse();
    digits
}

/// Base-58 digit values, most significant first -> minimal big-endian bytes.
pub(crate) fn from_base58_digits(digits: &[u8]) -> Vec<u8> {
    let mut value = DecimalString::zero();
    for &digit in digits {
        value.mul_add(58, digit as u32);
    }
    value.to_bytes_be()
}
