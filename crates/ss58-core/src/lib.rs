//! SS58 address codec for Substrate-family networks.
//!
//! This crate provides pure Rust implementations of:
//! - Base58 radix conversion over arbitrary-length byte strings
//! - The `SS58PRE` domain-separated checksum
//! - A registry of known network prefixes (0, 2, 42) with display heuristics
//! - `encode` / `decode` / `convert` between public keys and address text
//!
//! Two backends are available. With the `native` feature (default) the
//! primary backend uses `num-bigint` and Blake2b-512, matching the wider
//! ecosystem. Without it, only the fallback backend is built: decimal-string
//! arithmetic with a SHA-256 checksum. Both emit the same Base58 digits for
//! the same bytes, but their checksums are not interchangeable.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod backend;
pub mod base58;
#[cfg(feature = "native")]
mod bigint;
pub mod checksum;
pub mod config;
pub mod decimal;
pub mod error;
pub mod network;

pub use address::{
    convert, decode, encode, public_key_from_hex, public_key_to_hex, validate_input,
    AddressFormat, Codec, Conversion, DecodedAddress,
};
pub use backend::Backend;
pub use config::{BackendChoice, ChecksumPolicy, CodecConfig};
pub use error::{AddressError, Result};
pub use network::{classify_prefix, guess_network, Network, PrefixClass};
