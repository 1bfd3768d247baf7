//! Base58 radix conversion.
//!
//! The alphabet handling and leading-zero bookkeeping live here. The numeric
//! part of the conversion (bytes <-> base-58 digits) is delegated to the
//! active [`Backend`], which is either arbitrary-precision or decimal-string
//! arithmetic. Both backends produce identical text for identical bytes.

use alloc::string::String;
use alloc::vec::Vec;

use crate::backend::Backend;
use crate::error::{AddressError, Result};

/// Bitcoin-style Base58 alphabet: no `0`, `O`, `I` or `l`.
pub const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The alphabet's zero symbol. One is emitted per leading zero byte.
pub const ZERO_SYMBOL: char = '1';

const INVALID: u8 = 0xFF;

/// ASCII -> digit value lookup, `INVALID` for characters outside the alphabet.
const DECODE_MAP: [u8; 128] = {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        map[BASE58_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Digit value of `c`, or `None` if it is not in the alphabet.
#[inline]
pub fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_MAP[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Check whether `c` belongs to the Base58 alphabet.
#[inline]
pub fn is_base58_char(c: char) -> bool {
    digit_value(c).is_some()
}

/// Encode `bytes` as Base58 using `backend` for the numeric conversion.
///
/// Leading zero bytes carry no numeric weight, so each one is emitted as a
/// [`ZERO_SYMBOL`] in front of the numeric digits. Empty and all-zero input
/// therefore produce only zero symbols.
pub fn encode(bytes: &[u8], backend: Backend) -> String {
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let digits = backend.to_base58_digits(&bytes[leading_zeros..]);

    let mut result = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        result.push(ZERO_SYMBOL);
    }
    for digit in digits {
        result.push(BASE58_ALPHABET[digit as usize] as char);
    }
    result
}

/// Decode Base58 `text` into bytes using `backend` for the numeric conversion.
///
/// Every character is checked before any arithmetic happens; the first one
/// outside the alphabet is reported in [`AddressError::InvalidCharacter`].
pub fn decode(text: &str, backend: Backend) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(text.len());
    for c in text.chars() {
        let value = digit_value(c).ok_or(AddressError::InvalidCharacter(c))?;
        digits.push(value);
    }

    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
    let numeric = backend.from_base58_digits(&digits[leading_zeros..]);

    let mut result = Vec::with_capacity(leading_zeros + numeric.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&numeric);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_decode_map_covers_alphabet() {
        for (i, &c) in BASE58_ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(c as char), Some(i as u8));
        }
        for c in ['0', 'O', 'I', 'l', '+', '/', ' ', 'é'] {
            assert_eq!(digit_value(c), None, "{:?} should be rejected", c);
        }
    }

    #[test]
    fn test_known_vectors() {
        for backend in Backend::available() {
            assert_eq!(encode(b"hello world", backend), "StV1DL6CwTryKyV");
            assert_eq!(encode(&[0, 0, 0, 1, 2], backend), "1115T");
            assert_eq!(decode("StV1DL6CwTryKyV", backend).unwrap(), b"hello world");
            assert_eq!(decode("1115T", backend).unwrap(), vec![0, 0, 0, 1, 2]);
        }
    }

    #[test]
    fn test_empty_and_zero_input() {
        for backend in Backend::available() {
            assert_eq!(encode(&[], backend), "");
            assert_eq!(encode(&[0], backend), "1");
            assert_eq!(encode(&[0, 0, 0], backend), "111");
            assert_eq!(decode("", backend).unwrap(), Vec::<u8>::new());
            assert_eq!(decode("111", backend).unwrap(), vec![0, 0, 0]);
        }
    }

    #[test]
    fn test_invalid_character_is_named() {
        for backend in Backend::available() {
            assert_eq!(decode("5Grw0aEF", backend), Err(AddressError::InvalidCharacter('0')));
            assert_eq!(decode("abcl", backend), Err(AddressError::InvalidCharacter('l')));
        }
    }
}
