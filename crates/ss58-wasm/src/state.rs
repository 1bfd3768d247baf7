//! Serializable views of codec results for JS hosts.

use serde::{Deserialize, Serialize};
use ss58_core::{public_key_to_hex, AddressFormat, Conversion, DecodedAddress, PrefixClass};
use wasm_bindgen::prelude::*;

/// A decoded address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedInfo {
    /// Network prefix byte.
    pub prefix: u8,
    /// Public key, `0x`-prefixed hex.
    pub public_key: String,
    /// Checksum bytes as found in the address, hex.
    pub checksum: String,
    /// Whether the checksum matched the active backend.
    pub checksum_valid: bool,
    /// Known network name, if the prefix is registered.
    pub network: Option<String>,
    /// Human label for the prefix.
    pub label: String,
}

impl From<&DecodedAddress> for DecodedInfo {
    fn from(decoded: &DecodedAddress) -> Self {
        let class = decoded.prefix_class();
        DecodedInfo {
            prefix: decoded.prefix,
            public_key: public_key_to_hex(&decoded.public_key),
            checksum: hex::encode(decoded.checksum),
            checksum_valid: decoded.checksum_valid,
            network: class.network().map(|n| n.name().to_string()),
            label: class.label().to_string(),
        }
    }
}

impl DecodedInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Result of a best-effort conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionInfo {
    /// Address text to use.
    pub text: String,
    /// "unchanged", "converted" or "degraded".
    pub status: String,
    /// Why the conversion degraded.
    pub error: Option<String>,
}

impl From<&Conversion> for ConversionInfo {
    fn from(conversion: &Conversion) -> Self {
        ConversionInfo {
            text: conversion.text().to_string(),
            status: conversion.status().to_string(),
            error: conversion.error().map(|e| e.to_string()),
        }
    }
}

impl ConversionInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

/// Address format classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Known network name, if any.
    pub network: Option<String>,
    /// Human label ("primary network", "generic", ...).
    pub label: String,
    /// Raw prefix when decoded to an unregistered one.
    pub unknown_prefix: Option<u8>,
    /// False when only the leading-character heuristic was applied.
    pub authoritative: bool,
}

impl From<&AddressFormat> for FormatInfo {
    fn from(format: &AddressFormat) -> Self {
        let unknown_prefix = match format.class {
            PrefixClass::Unknown(prefix) => Some(prefix),
            _ => None,
        };
        FormatInfo {
            network: format.class.network().map(|n| n.name().to_string()),
            label: format.label().to_string(),
            unknown_prefix,
            authoritative: format.authoritative,
        }
    }
}

impl FormatInfo {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss58_core::{AddressError, Backend, Codec, Network};

    #[test]
    fn test_decoded_info() {
        let codec = Codec::with_backend(Backend::Fallback);
        let text = codec.encode(&[0u8; 32], 0).unwrap();
        let info = DecodedInfo::from(&codec.decode(&text).unwrap());

        assert_eq!(info.prefix, 0);
        assert_eq!(info.public_key, format!("0x{}", "00".repeat(32)));
        assert_eq!(info.checksum, "9ddd");
        assert!(info.checksum_valid);
        assert_eq!(info.network.as_deref(), Some("polkadot"));
        assert_eq!(info.label, "primary network");
    }

    #[test]
    fn test_conversion_info() {
        let degraded = Conversion::Degraded {
            original: "abc".to_string(),
            error: AddressError::TooShort(2),
        };
        let info = ConversionInfo::from(&degraded);
        assert_eq!(info.text, "abc");
        assert_eq!(info.status, "degraded");
        assert_eq!(info.error.as_deref(), Some("decoded address too short: 2 bytes"));

        let info = ConversionInfo::from(&Conversion::Converted("5C4h".to_string()));
        assert_eq!(info.status, "converted");
        assert_eq!(info.error, None);
    }

    #[test]
    fn test_format_info() {
        let info = FormatInfo::from(&AddressFormat {
            class: PrefixClass::Known(Network::Kusama),
            authoritative: false,
        });
        assert_eq!(info.network.as_deref(), Some("kusama"));
        assert_eq!(info.label, "secondary network");
        assert_eq!(info.unknown_prefix, None);

        let info = FormatInfo::from(&AddressFormat {
            class: PrefixClass::Unknown(7),
            authoritative: true,
        });
        assert_eq!(info.unknown_prefix, Some(7));
        assert_eq!(info.label, "unknown");

        let info = FormatInfo::from(&AddressFormat {
            class: PrefixClass::Unrecognized,
            authoritative: false,
        });
        assert_eq!(info.network, None);
        assert_eq!(info.unknown_prefix, None);
        assert_eq!(info.label, "unknown");
    }
}
