//! WebAssembly bindings for the SS58 address codec.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Encoding public keys to network-specific addresses
//! - Decoding and classifying addresses
//! - Converting addresses between networks (best effort)
//! - Validating user input before it reaches the codec

use wasm_bindgen::prelude::*;

pub mod codec;
pub mod logger;
pub mod state;

// Re-export main types for JS access
pub use codec::AddressCodec;

/// Initialize the WASM module with better panic messages and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logger::install(log::LevelFilter::Warn);
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
