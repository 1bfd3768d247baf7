//! SS58 checksum computation.
//!
//! The checksum is the first two bytes of `Hash("SS58PRE" || payload)`, where
//! the payload is the prefix byte followed by the public key. The canonical
//! hash is Blake2b-512. Builds without the `native` feature substitute
//! SHA-256, which yields different (incompatible) checksum bytes.

use sha2::Digest;

/// Domain separation tag prepended to every checksum hash input.
pub const DOMAIN_TAG: &[u8; 7] = b"SS58PRE";

/// Number of checksum bytes appended to an encoded address.
pub const CHECKSUM_LEN: usize = 2;

/// Hash `DOMAIN_TAG || payload` with `D` and keep the leading checksum bytes.
#[inline]
fn tagged_checksum<D: Digest>(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = D::new();
    hasher.update(DOMAIN_TAG);
    hasher.update(payload);
    let digest = hasher.finalize();
    [digest[0], digest[1]]
}

/// Canonical checksum: Blake2b-512.
#[cfg(feature = "native")]
#[inline]
pub fn blake2b_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    tagged_checksum::<blake2::Blake2b512>(payload)
}

/// Substitute checksum: SHA-256.
#[inline]
pub fn sha256_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    tagged_checksum::<sha2::Sha256>(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";

    fn payload(prefix: u8, key_hex: &str) -> alloc::vec::Vec<u8> {
        let mut data = alloc::vec![prefix];
        data.extend(hex::decode(key_hex).unwrap());
        data
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_blake2b_checksum() {
        assert_eq!(blake2b_checksum(&payload(42, ALICE)), [0x1d, 0x21]);
        assert_eq!(blake2b_checksum(&payload(0, ALICE)), [0x7f, 0x46]);
        assert_eq!(blake2b_checksum(&[0u8; 33]), [0xd4, 0xbe]);
    }

    #[test]
    fn test_sha256_checksum() {
        assert_eq!(sha256_checksum(&payload(42, ALICE)), [0x0e, 0x87]);
        assert_eq!(sha256_checksum(&payload(2, ALICE)), [0xb4, 0x9c]);
        assert_eq!(sha256_checksum(&[0u8; 33]), [0x9d, 0xdd]);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_hashes_disagree() {
        let data = payload(42, ALICE);
        assert_ne!(blake2b_checksum(&data), sha256_checksum(&data));
    }
}
