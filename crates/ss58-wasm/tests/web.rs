//! Browser/node tests for the JS surface.

#![cfg(target_arch = "wasm32")]

use ss58_wasm::codec::{available_backends, prefix_label, validate_address};
use ss58_wasm::state::{ConversionInfo, DecodedInfo, FormatInfo};
use ss58_wasm::AddressCodec;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

const ALICE_HEX: &str = "d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";

fn fallback() -> AddressCodec {
    AddressCodec::from_json(r#"{"backend": "fallback"}"#).unwrap()
}

#[wasm_bindgen_test]
fn default_codec_encodes_canonical_generic_address() {
    let codec = AddressCodec::new(JsValue::UNDEFINED).unwrap();
    let text = codec.encode_hex(ALICE_HEX, 42).unwrap();
    if codec.backend() == "primary" {
        assert_eq!(text, "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
    }
    assert!(validate_address(&text).unwrap());
}

#[wasm_bindgen_test]
fn decode_returns_record() {
    let codec = fallback();
    let text = codec.encode_hex(ALICE_HEX, 2).unwrap();
    let info: DecodedInfo = serde_wasm_bindgen::from_value(codec.decode(&text).unwrap()).unwrap();
    assert_eq!(info.prefix, 2);
    assert_eq!(info.public_key, format!("0x{}", ALICE_HEX));
    assert!(info.checksum_valid);
    assert_eq!(info.network.as_deref(), Some("kusama"));
}

#[wasm_bindgen_test]
fn decode_errors_are_thrown() {
    let codec = fallback();
    assert!(codec.decode("ab").is_err());
    assert!(codec.decode("5Grw0").is_err());
}

#[wasm_bindgen_test]
fn convert_reports_status() {
    let codec = fallback();
    let generic = codec.encode_hex(ALICE_HEX, 42).unwrap();
    let polkadot = codec.encode_hex(ALICE_HEX, 0).unwrap();

    let info: ConversionInfo =
        serde_wasm_bindgen::from_value(codec.convert(&generic, 0).unwrap()).unwrap();
    assert_eq!(info.text, polkadot);
    assert_eq!(info.status, "converted");

    let info: ConversionInfo =
        serde_wasm_bindgen::from_value(codec.convert("bad0", 0).unwrap()).unwrap();
    assert_eq!(info.text, "bad0");
    assert_eq!(info.status, "degraded");
    assert!(info.error.is_some());

    assert_eq!(codec.to_generic(&polkadot), generic);
    assert_eq!(codec.for_network(&generic, "polkadot").unwrap(), polkadot);
    assert!(codec.for_network(&generic, "westend").is_err());
}

#[wasm_bindgen_test]
fn classify_and_labels() {
    let codec = fallback();
    let kusama = codec.encode_hex(ALICE_HEX, 2).unwrap();
    let info: FormatInfo = serde_wasm_bindgen::from_value(codec.classify(&kusama).unwrap()).unwrap();
    assert_eq!(info.label, "secondary network");
    assert!(info.authoritative);
    assert_eq!(prefix_label(42), "generic");
}

#[wasm_bindgen_test]
fn strict_config_rejects_foreign_checksum() {
    let codec = AddressCodec::from_json(r#"{"backend": "fallback", "checksum": "reject"}"#).unwrap();
    let canonical = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
    assert!(codec.decode(canonical).is_err());
    assert!(!codec.verify_checksum(canonical).unwrap());
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(AddressCodec::from_json(r#"{"backend": "gpu"}"#).is_err());
    assert!(AddressCodec::from_json("not json").is_err());
}

#[wasm_bindgen_test]
fn backends_are_listed() {
    let names: Vec<String> = serde_wasm_bindgen::from_value(available_backends().unwrap()).unwrap();
    assert_eq!(names.last().map(String::as_str), Some("fallback"));
}
