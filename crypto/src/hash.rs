//! SHA-256 hashing over UTF-8 strings.
//!
//! The whole chain is built from this one primitive: every commit, entropy,
//! master, and pick hash is SHA-256 of some string construction, hex-encoded
//! in lowercase so external verifiers reproduce identical values.

use fairdraw_types::Digest;
use sha2::{Digest as _, Sha256};

/// Compute the SHA-256 digest of a string's UTF-8 bytes.
pub fn sha256_hex(input: &str) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    Digest::new(output)
}

/// Hash multiple string parts in sequence (avoids concatenation allocation).
///
/// Produces the same digest as `sha256_hex` over the joined parts; the
/// entropy stage relies on this equivalence for its no-separator
/// concatenation contract.
pub fn sha256_hex_multi(parts: &[&str]) -> Digest {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    Digest::new(output)
}
