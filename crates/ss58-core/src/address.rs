//! SS58 address encoding, decoding and prefix conversion.
//!
//! Binary layout of an address:
//!
//! ```text
//! [prefix (1)] [public key (32)] [checksum (2)]
//! ```
//!
//! The checksum covers prefix and key. The whole 35-byte payload is then
//! Base58-encoded.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::backend::Backend;
use crate::base58;
use crate::checksum::CHECKSUM_LEN;
use crate::config::{ChecksumPolicy, CodecConfig};
use crate::error::{AddressError, Result};
use crate::network::{classify_prefix, guess_network, Network, PrefixClass, GENERIC_PREFIX};

/// Public key length accepted by `encode`.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Smallest decodable payload: prefix byte plus checksum.
pub const MIN_DECODED_LEN: usize = 1 + CHECKSUM_LEN;

/// Accepted length window for addresses arriving from outside.
pub const MIN_ADDRESS_CHARS: usize = 47;
pub const MAX_ADDRESS_CHARS: usize = 48;

/// A decoded address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// The network prefix byte.
    pub prefix: u8,
    /// Everything between prefix and checksum. 32 bytes for well-formed
    /// addresses; foreign strings may yield other lengths.
    pub public_key: Vec<u8>,
    /// The trailing checksum bytes as found in the address.
    pub checksum: [u8; CHECKSUM_LEN],
    /// Whether `checksum` matches the decoding backend's checksum.
    pub checksum_valid: bool,
}

impl DecodedAddress {
    /// The public key as a fixed array, if it has the standard length.
    pub fn public_key_array(&self) -> Result<[u8; PUBLIC_KEY_LEN]> {
        self.public_key
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidKeyLength(self.public_key.len()))
    }

    /// Registry classification of the prefix byte.
    pub fn prefix_class(&self) -> PrefixClass {
        classify_prefix(self.prefix)
    }

    /// `prefix || public_key`, the input to the checksum hash.
    fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + self.public_key.len());
        payload.push(self.prefix);
        payload.extend_from_slice(&self.public_key);
        payload
    }
}

/// Outcome of a best-effort prefix conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// The address already had the target prefix; this is the input text.
    Unchanged(String),
    /// The key re-encoded under the target prefix.
    Converted(String),
    /// Decoding or re-encoding failed; this is the input text.
    Degraded { original: String, error: AddressError },
}

impl Conversion {
    /// The address text to use, whatever the outcome.
    pub fn text(&self) -> &str {
        match self {
            Conversion::Unchanged(text) | Conversion::Converted(text) => text,
            Conversion::Degraded { original, .. } => original,
        }
    }

    /// Consume the outcome, keeping only the address text.
    pub fn into_text(self) -> String {
        match self {
            Conversion::Unchanged(text) | Conversion::Converted(text) => text,
            Conversion::Degraded { original, .. } => original,
        }
    }

    /// Whether the original text came back because of an error.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Conversion::Degraded { .. })
    }

    /// The error behind a degraded conversion.
    pub fn error(&self) -> Option<&AddressError> {
        match self {
            Conversion::Degraded { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Short status name for hosts.
    pub fn status(&self) -> &'static str {
        match self {
            Conversion::Unchanged(_) => "unchanged",
            Conversion::Converted(_) => "converted",
            Conversion::Degraded { .. } => "degraded",
        }
    }
}

/// Format classification of an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFormat {
    /// Network class of the address.
    pub class: PrefixClass,
    /// True when `class` came from a full decode rather than the
    /// leading-character heuristic.
    pub authoritative: bool,
}

impl AddressFormat {
    /// Human label for UI hints.
    pub fn label(&self) -> &'static str {
        self.class.label()
    }
}

/// The SS58 codec bound to one backend and configuration.
///
/// Stateless apart from its settings; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    backend: Backend,
    config: CodecConfig,
}

impl Default for Codec {
    fn default() -> Self {
        Codec::with_backend(Backend::detect())
    }
}

impl Codec {
    /// Build a codec from configuration, resolving the backend once.
    pub fn new(config: CodecConfig) -> Result<Self> {
        let backend = Backend::resolve(config.backend)?;
        Ok(Codec { backend, config })
    }

    /// A codec on `backend` with default settings.
    pub fn with_backend(backend: Backend) -> Self {
        Codec {
            backend,
            config: CodecConfig::default(),
        }
    }

    /// The backend resolved at construction.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// The settings this codec was built with.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Checksum of `prefix || public_key` under this codec's backend.
    pub fn checksum(&self, prefix: u8, public_key: &[u8]) -> [u8; CHECKSUM_LEN] {
        let mut payload = Vec::with_capacity(1 + public_key.len());
        payload.push(prefix);
        payload.extend_from_slice(public_key);
        self.backend.checksum(&payload)
    }

    /// Encode a 32-byte public key under `prefix`.
    pub fn encode(&self, public_key: &[u8], prefix: u8) -> Result<String> {
        if public_key.len() != PUBLIC_KEY_LEN {
            return Err(AddressError::InvalidKeyLength(public_key.len()));
        }

        let mut data = Vec::with_capacity(1 + PUBLIC_KEY_LEN + CHECKSUM_LEN);
        data.push(prefix);
        data.extend_from_slice(public_key);
        let checksum = self.backend.checksum(&data);
        data.extend_from_slice(&checksum);

        Ok(base58::encode(&data, self.backend))
    }

    /// Encode under the configured default prefix.
    pub fn encode_default(&self, public_key: &[u8]) -> Result<String> {
        self.encode(public_key, self.config.default_prefix)
    }

    /// Encode a hex public key (optional `0x` prefix) under `prefix`.
    pub fn encode_hex(&self, public_key_hex: &str, prefix: u8) -> Result<String> {
        let public_key = public_key_from_hex(public_key_hex)?;
        self.encode(&public_key, prefix)
    }

    /// Decode an address into prefix, key and checksum.
    ///
    /// The checksum is compared against this codec's backend according to
    /// the configured [`ChecksumPolicy`].
    pub fn decode(&self, text: &str) -> Result<DecodedAddress> {
        let address = self.split(text)?;

        if self.config.checksum == ChecksumPolicy::Ignore {
            return Ok(address);
        }

        match self.verify_checksum(&address) {
            Ok(()) => {}
            Err(error) if self.config.checksum == ChecksumPolicy::Reject => return Err(error),
            Err(error) => {
                log::warn!("ss58: {} in {} ({} backend)", error, text, self.backend);
            }
        }

        Ok(address)
    }

    /// Base58-decode and split into prefix, key and checksum.
    ///
    /// `checksum_valid` is filled in, but the checksum policy is not applied.
    pub fn split(&self, text: &str) -> Result<DecodedAddress> {
        let decoded = base58::decode(text, self.backend)?;

        if decoded.len() < MIN_DECODED_LEN {
            return Err(AddressError::TooShort(decoded.len()));
        }

        let split = decoded.len() - CHECKSUM_LEN;
        let checksum = [decoded[split], decoded[split + 1]];

        let mut address = DecodedAddress {
            prefix: decoded[0],
            public_key: decoded[1..split].to_vec(),
            checksum,
            checksum_valid: false,
        };
        address.checksum_valid = self.backend.checksum(&address.payload()) == checksum;
        Ok(address)
    }

    /// Check a decoded record's checksum against this codec's backend.
    pub fn verify_checksum(&self, address: &DecodedAddress) -> Result<()> {
        let expected = self.backend.checksum(&address.payload());
        if expected == address.checksum {
            Ok(())
        } else {
            Err(AddressError::ChecksumMismatch {
                expected,
                found: address.checksum,
            })
        }
    }

    /// Fallible prefix conversion.
    ///
    /// Returns the input text itself when it already carries `target_prefix`.
    pub fn try_convert(&self, text: &str, target_prefix: u8) -> Result<Conversion> {
        let decoded = self.decode(text)?;
        if decoded.prefix == target_prefix {
            return Ok(Conversion::Unchanged(text.to_string()));
        }
        let encoded = self.encode(&decoded.public_key, target_prefix)?;
        Ok(Conversion::Converted(encoded))
    }

    /// Best-effort prefix conversion.
    ///
    /// Never fails: a decode or encode error is logged and reported as
    /// [`Conversion::Degraded`] carrying the original text.
    pub fn convert(&self, text: &str, target_prefix: u8) -> Conversion {
        match self.try_convert(text, target_prefix) {
            Ok(conversion) => conversion,
            Err(error) => {
                log::warn!(
                    "ss58: conversion of {} to prefix {} failed: {}; keeping original",
                    text,
                    target_prefix,
                    error
                );
                Conversion::Degraded {
                    original: text.to_string(),
                    error,
                }
            }
        }
    }

    /// Normalize to the generic form used as a storage key.
    pub fn to_generic(&self, text: &str) -> Conversion {
        self.convert(text.trim(), GENERIC_PREFIX)
    }

    /// Convert to `network`'s display form.
    pub fn for_network(&self, text: &str, network: Network) -> Conversion {
        self.convert(text.trim(), network.prefix())
    }

    /// Classify an address: by its decoded prefix when it decodes at all,
    /// otherwise by the leading-character heuristic.
    ///
    /// The checksum policy does not apply here; a foreign checksum still
    /// yields an authoritative prefix.
    pub fn classify(&self, text: &str) -> AddressFormat {
        match self.split(text.trim()) {
            Ok(decoded) => AddressFormat {
                class: decoded.prefix_class(),
                authoritative: true,
            },
            Err(error) => {
                log::debug!("ss58: classify falling back to heuristic: {}", error);
                let class = match guess_network(text) {
                    Some(network) => PrefixClass::Known(network),
                    None => PrefixClass::Unrecognized,
                };
                AddressFormat {
                    class,
                    authoritative: false,
                }
            }
        }
    }
}

/// Check an externally supplied address before decoding: 47..=48 characters,
/// all from the Base58 alphabet.
pub fn validate_input(text: &str) -> Result<()> {
    let length = text.chars().count();
    if !(MIN_ADDRESS_CHARS..=MAX_ADDRESS_CHARS).contains(&length) {
        return Err(AddressError::InvalidLength(length));
    }
    match text.chars().find(|&c| !base58::is_base58_char(c)) {
        Some(c) => Err(AddressError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

/// Parse a hex-encoded 32-byte public key, with or without `0x`.
pub fn public_key_from_hex(hex_key: &str) -> Result<[u8; PUBLIC_KEY_LEN]> {
    let trimmed = hex_key.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|_| AddressError::InvalidHex)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| AddressError::InvalidKeyLength(bytes.len()))
}

/// Hex rendering of a public key with `0x`, as wallets display it.
pub fn public_key_to_hex(public_key: &[u8]) -> String {
    format!("0x{}", hex::encode(public_key))
}

/// Encode with the best available backend.
pub fn encode(public_key: &[u8], prefix: u8) -> Result<String> {
    Codec::default().encode(public_key, prefix)
}

/// Decode with the best available backend.
pub fn decode(text: &str) -> Result<DecodedAddress> {
    Codec::default().decode(text)
}

/// Best-effort conversion with the best available backend.
pub fn convert(text: &str, target_prefix: u8) -> String {
    Codec::default().convert(text, target_prefix).into_text()
}
