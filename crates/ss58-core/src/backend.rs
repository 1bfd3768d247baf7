//! Backend selection.
//!
//! A backend pairs a radix engine with a checksum hash:
//!
//! | Backend    | Radix arithmetic        | Checksum hash |
//! |------------|-------------------------|---------------|
//! | `Primary`  | `num-bigint` `BigUint`  | Blake2b-512   |
//! | `Fallback` | decimal strings         | SHA-256       |
//!
//! `Primary` only exists when the crate is built with the `native` feature.
//! Both produce the same Base58 text for the same bytes; only their
//! checksums differ.

use alloc::vec::Vec;

use crate::checksum::{self, CHECKSUM_LEN};
use crate::config::BackendChoice;
use crate::decimal;
use crate::error::Result;

/// The numeric/hash implementation a codec runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Arbitrary-precision integers with the canonical Blake2b checksum.
    #[cfg(feature = "native")]
    Primary,
    /// Decimal-string arithmetic with a SHA-256 substitute checksum.
    Fallback,
}

impl Backend {
    /// The best backend compiled into this build.
    pub fn detect() -> Self {
        #[cfg(feature = "native")]
        {
            Backend::Primary
        }
        #[cfg(not(feature = "native"))]
        {
            Backend::Fallback
        }
    }

    /// Resolve a configured choice against what this build provides.
    pub fn resolve(choice: BackendChoice) -> Result<Self> {
        let backend = match choice {
            BackendChoice::Auto => Backend::detect(),
            #[cfg(feature = "native")]
            BackendChoice::Primary => Backend::Primary,
            #[cfg(not(feature = "native"))]
            BackendChoice::Primary => {
                return Err(crate::error::AddressError::BackendUnavailable("primary (built without `native`)"))
            }
            BackendChoice::Fallback => Backend::Fallback,
        };
        log::debug!("ss58: resolved backend {:?} -> {}", choice, backend.name());
        Ok(backend)
    }

    /// All backends compiled into this build, best first.
    pub fn available() -> Vec<Backend> {
        let mut backends = Vec::with_capacity(2);
        #[cfg(feature = "native")]
        backends.push(Backend::Primary);
        backends.push(Backend::Fallback);
        backends
    }

    /// Get backend name as string.
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "native")]
            Backend::Primary => "primary",
            Backend::Fallback => "fallback",
        }
    }

    /// Name of the checksum hash this backend uses.
    pub fn hash_name(&self) -> &'static str {
        match self {
            #[cfg(feature = "native")]
            Backend::Primary => "blake2b-512",
            Backend::Fallback => "sha-256",
        }
    }

    /// Checksum of `payload` (prefix byte followed by public key).
    pub fn checksum(&self, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
        match self {
            #[cfg(feature = "native")]
            Backend::Primary => checksum::blake2b_checksum(payload),
            Backend::Fallback => checksum::sha256_checksum(payload),
        }
    }

    pub(crate) fn to_base58_digits(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            #[cfg(feature = "native")]
            Backend::Primary => crate::bigint::to_base58_digits(bytes),
            Backend::Fallback => decimal::to_base58_digits(bytes),
        }
    }

    pub(crate) fn from_base58_digits(&self, digits: &[u8]) -> Vec<u8> {
        match self {
            #[cfg(feature = "native")]
            Backend::Primary => crate::bigint::from_base58_digits(digits),
            Backend::Fallback => decimal::from_base58_digits(digits),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::detect()
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fallback() {
        assert_eq!(Backend::resolve(BackendChoice::Fallback), Ok(Backend::Fallback));
        assert_eq!(Backend::resolve(BackendChoice::Auto), Ok(Backend::detect()));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_native_build_prefers_primary() {
        assert_eq!(Backend::detect(), Backend::Primary);
        assert_eq!(Backend::available(), alloc::vec![Backend::Primary, Backend::Fallback]);
        assert_eq!(Backend::resolve(BackendChoice::Primary), Ok(Backend::Primary));
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn test_primary_unavailable_without_native() {
        use crate::error::AddressError;

        assert_eq!(Backend::detect(), Backend::Fallback);
        assert!(matches!(
            Backend::resolve(BackendChoice::Primary),
            Err(AddressError::BackendUnavailable(_))
        ));
    }
}
