//! Codec controller exposed to JavaScript.

use ss58_core::{
    classify_prefix, guess_network, validate_input, AddressError, Backend, Codec, CodecConfig,
    Network,
};
use wasm_bindgen::prelude::*;

use crate::state::{ConversionInfo, DecodedInfo, FormatInfo};

fn js_error(error: AddressError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// An SS58 codec bound to one backend for its lifetime.
#[wasm_bindgen]
pub struct AddressCodec {
    codec: Codec,
}

impl AddressCodec {
    fn with_config(config: CodecConfig) -> Result<AddressCodec, JsValue> {
        let codec = Codec::new(config).map_err(js_error)?;
        log::info!("ss58: codec ready on {} backend ({})", codec.backend(), codec.backend().hash_name());
        Ok(AddressCodec { codec })
    }
}

#[wasm_bindgen]
impl AddressCodec {
    /// Create a codec.
    ///
    /// # Arguments
    /// * `config` - Optional `{ backend, default_prefix, checksum }` object.
    ///   `backend` is "auto", "primary" or "fallback"; `checksum` is
    ///   "ignore", "warn" or "reject".
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AddressCodec, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            CodecConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| js_error(AddressError::InvalidConfig(e.to_string())))?
        };
        Self::with_config(config)
    }

    /// Create a codec from a JSON config string.
    #[wasm_bindgen]
    pub fn from_json(json: &str) -> Result<AddressCodec, JsValue> {
        let config: CodecConfig = serde_json::from_str(json)
            .map_err(|e| js_error(AddressError::InvalidConfig(e.to_string())))?;
        Self::with_config(config)
    }

    /// Encode a 32-byte public key under `prefix`.
    #[wasm_bindgen]
    pub fn encode(&self, public_key: &[u8], prefix: u8) -> Result<String, JsValue> {
        self.codec.encode(public_key, prefix).map_err(js_error)
    }

    /// Encode under the configured default prefix.
    #[wasm_bindgen]
    pub fn encode_default(&self, public_key: &[u8]) -> Result<String, JsValue> {
        self.codec.encode_default(public_key).map_err(js_error)
    }

    /// Encode a hex public key (with or without `0x`) under `prefix`.
    #[wasm_bindgen]
    pub fn encode_hex(&self, public_key_hex: &str, prefix: u8) -> Result<String, JsValue> {
        self.codec.encode_hex(public_key_hex, prefix).map_err(js_error)
    }

    /// Decode an address into `{ prefix, public_key, checksum, checksum_valid, network, label }`.
    #[wasm_bindgen]
    pub fn decode(&self, address: &str) -> Result<JsValue, JsValue> {
        let decoded = self.codec.decode(address).map_err(js_error)?;
        DecodedInfo::from(&decoded).to_js()
    }

    /// Check the address checksum against this codec's backend.
    ///
    /// Returns `false` on a mismatch; other decode failures are errors.
    #[wasm_bindgen]
    pub fn verify_checksum(&self, address: &str) -> Result<bool, JsValue> {
        let split = self.codec.split(address).map_err(js_error)?;
        Ok(split.checksum_valid)
    }

    /// Convert to `target_prefix`, returning `{ text, status, error }`.
    ///
    /// Never throws: failures come back with status "degraded" and the
    /// original text.
    #[wasm_bindgen]
    pub fn convert(&self, address: &str, target_prefix: u8) -> Result<JsValue, JsValue> {
        ConversionInfo::from(&self.codec.convert(address, target_prefix)).to_js()
    }

    /// Convert to `target_prefix`, returning only the address text.
    #[wasm_bindgen]
    pub fn convert_text(&self, address: &str, target_prefix: u8) -> String {
        self.codec.convert(address, target_prefix).into_text()
    }

    /// Normalize to the generic (prefix 42) storage form.
    #[wasm_bindgen]
    pub fn to_generic(&self, address: &str) -> String {
        self.codec.to_generic(address).into_text()
    }

    /// Convert to a network's display form ("polkadot", "kusama", "generic").
    #[wasm_bindgen]
    pub fn for_network(&self, address: &str, network: &str) -> Result<String, JsValue> {
        let net = Network::from_str(network)
            .ok_or_else(|| JsValue::from_str("Invalid network"))?;
        Ok(self.codec.for_network(address, net).into_text())
    }

    /// Classify an address into `{ network, label, unknown_prefix, authoritative }`.
    #[wasm_bindgen]
    pub fn classify(&self, address: &str) -> Result<JsValue, JsValue> {
        FormatInfo::from(&self.codec.classify(address)).to_js()
    }

    /// Get the active backend name.
    #[wasm_bindgen(getter)]
    pub fn backend(&self) -> String {
        self.codec.backend().name().to_string()
    }

    /// Get the checksum hash of the active backend.
    #[wasm_bindgen(getter)]
    pub fn hash_name(&self) -> String {
        self.codec.backend().hash_name().to_string()
    }

    /// Get the configured default prefix.
    #[wasm_bindgen(getter)]
    pub fn default_prefix(&self) -> u8 {
        self.codec.config().default_prefix
    }
}

/// Check a user-supplied address: 47-48 Base58 characters.
#[wasm_bindgen]
pub fn validate_address(address: &str) -> Result<bool, JsValue> {
    match validate_input(address) {
        Ok(()) => Ok(true),
        Err(e) => Err(js_error(e)),
    }
}

/// Names of the backends compiled into this module, best first.
#[wasm_bindgen]
pub fn available_backends() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Backend::available().iter().map(|b| b.name()).collect();
    serde_wasm_bindgen::to_value(&names)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}

/// Human label for a prefix byte.
#[wasm_bindgen]
pub fn prefix_label(prefix: u8) -> String {
    classify_prefix(prefix).label().to_string()
}

/// Quick network hint from the first character; not authoritative.
#[wasm_bindgen]
pub fn guess_address_network(address: &str) -> Option<String> {
    guess_network(address).map(|n| n.name().to_string())
}
