//! Codec error type.

use alloc::string::String;

/// Errors raised by the address codec.
///
/// `encode` and `decode` surface these directly. `convert` catches them and
/// reports a degraded [`Conversion`](crate::Conversion) instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// A character outside the Base58 alphabet.
    #[error("invalid Base58 character: {0:?}")]
    InvalidCharacter(char),
    /// The decoded payload is shorter than prefix + checksum.
    #[error("decoded address too short: {0} bytes")]
    TooShort(usize),
    /// A public key that is not exactly 32 bytes.
    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),
    /// Address text outside the accepted 47..=48 character window.
    #[error("invalid address length: {0} characters")]
    InvalidLength(usize),
    /// A public key supplied as malformed hex.
    #[error("invalid hex public key")]
    InvalidHex,
    /// The embedded checksum does not match the active backend's checksum.
    #[error("checksum mismatch: expected {expected:02x?}, found {found:02x?}")]
    ChecksumMismatch { expected: [u8; 2], found: [u8; 2] },
    /// The requested backend was not compiled into this build.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(&'static str),
    /// Codec configuration could not be parsed.
    #[error("invalid codec config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, AddressError>;
