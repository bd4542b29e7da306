//! The entropy stage: canonicalizing external feeds into one digest.

use fairdraw_crypto::sha256_hex_multi;
use fairdraw_types::Digest;

/// Digest the ordered source texts plus the date stamp.
///
/// The hashed input is the plain concatenation `sources[0] + ... +
/// sources[n-1] + date_stamp` with no separators. Order is part of the
/// external contract: swap two sources and the hash changes. Empty strings
/// are valid inputs; entropy quality is the caller's concern.
pub fn compute_entropy_hash(sources: &[&str], date_stamp: &str) -> Digest {
    let mut parts: Vec<&str> = Vec::with_capacity(sources.len() + 1);
    parts.extend_from_slice(sources);
    parts.push(date_stamp);
    sha256_hex_multi(&parts)
}
