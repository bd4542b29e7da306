//! The derivation stage: master hash and bounded-integer expansion.
//!
//! The master hash is SHA-256 of `"{entropy_hex}-{secret}"` — entropy
//! first, secret second, literal hyphen between. Each derived value hashes
//! `"{master_hex}-{i}"` with a 1-based decimal index, reads the digest as a
//! 256-bit unsigned integer, and reduces it modulo the range span. Modulo
//! bias near the range boundaries is accepted: the span is tiny relative
//! to 2^256, and the scheme documents the bias instead of correcting it.

use crate::error::ValidationError;
use fairdraw_crypto::sha256_hex;
use fairdraw_types::{Digest, Secret};
use serde::{Deserialize, Serialize};

/// The result of one derivation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    /// The seed every value and every later audit hangs off.
    pub master_hash: Digest,
    /// Derived values in index order, each within the requested range.
    pub values: Vec<i64>,
}

/// One fully-expanded derivation step, for audit explanations.
///
/// A view over values already computed by [`derive`]; producing it runs no
/// extra derivation logic beyond decimal rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationTrace {
    /// 1-based index of the derived value.
    pub index: u32,
    /// The exact string that was hashed: `"{master_hex}-{index}"`.
    pub input: String,
    /// SHA-256 of `input`.
    pub pick_hash: Digest,
    /// `pick_hash` read as a base-16 unsigned integer, rendered in decimal.
    pub pick_int: String,
    /// `pick_int mod span`, before the range offset is added.
    pub raw_modulo: u128,
    /// The final value: `raw_modulo + range_min`.
    pub value: i64,
}

/// Combine the entropy hash and secret into the master hash.
///
/// Entropy hex first, secret second — the asymmetry is a compatibility
/// contract, not a stylistic choice.
pub fn master_hash(entropy_hash: &Digest, secret: &Secret) -> Digest {
    sha256_hex(&format!("{}-{}", entropy_hash.to_hex(), secret.expose()))
}

/// Derive `count` values in `[range_min, range_max]` from the entropy hash
/// and the secret.
///
/// The secret is re-validated here regardless of any earlier commitment —
/// this stage never trusts stale state.
pub fn derive(
    entropy_hash: &Digest,
    secret_input: &str,
    count: u32,
    range_min: i64,
    range_max: i64,
) -> Result<Derivation, ValidationError> {
    let secret = require_secret(secret_input)?;
    let span = validate_range(count, range_min, range_max)?;

    let master = master_hash(entropy_hash, &secret);
    let master_hex = master.to_hex();

    let mut values = Vec::with_capacity(count as usize);
    for i in 1..=count {
        let pick_hash = sha256_hex(&format!("{master_hex}-{i}"));
        values.push(value_from_pick(&pick_hash, span, range_min));
    }

    Ok(Derivation {
        master_hash: master,
        values,
    })
}

/// Like [`derive`], additionally exposing the per-index arithmetic so an
/// auditor can replay every step by hand.
pub fn derive_with_trace(
    entropy_hash: &Digest,
    secret_input: &str,
    count: u32,
    range_min: i64,
    range_max: i64,
) -> Result<(Derivation, Vec<DerivationTrace>), ValidationError> {
    let secret = require_secret(secret_input)?;
    let span = validate_range(count, range_min, range_max)?;

    let master = master_hash(entropy_hash, &secret);
    let master_hex = master.to_hex();

    let mut values = Vec::with_capacity(count as usize);
    let mut trace = Vec::with_capacity(count as usize);
    for i in 1..=count {
        let input = format!("{master_hex}-{i}");
        let pick_hash = sha256_hex(&input);
        let raw_modulo = pick_modulo(&pick_hash, span);
        let value = (range_min as i128 + raw_modulo as i128) as i64;
        values.push(value);
        trace.push(DerivationTrace {
            index: i,
            input,
            pick_hash,
            pick_int: digest_to_decimal(&pick_hash),
            raw_modulo,
            value,
        });
    }

    Ok((
        Derivation {
            master_hash: master,
            values,
        },
        trace,
    ))
}

fn require_secret(input: &str) -> Result<Secret, ValidationError> {
    Secret::parse(input).map_err(|_| ValidationError::MissingSecret)
}

fn validate_range(count: u32, range_min: i64, range_max: i64) -> Result<u128, ValidationError> {
    if count == 0 {
        return Err(ValidationError::InvalidCount(count));
    }
    if range_max < range_min {
        return Err(ValidationError::InvalidRange {
            min: range_min,
            max: range_max,
        });
    }
    Ok((range_max as i128 - range_min as i128 + 1) as u128)
}

fn value_from_pick(pick_hash: &Digest, span: u128, range_min: i64) -> i64 {
    (range_min as i128 + pick_modulo(pick_hash, span) as i128) as i64
}

/// Fold the digest into `pick mod span` without a big-integer type.
///
/// Reads the digest as a base-256 big-endian integer and keeps a running
/// remainder: `rem = (rem * 256 + byte) mod span`. Exact for every span a
/// 64-bit range can produce.
fn pick_modulo(pick_hash: &Digest, span: u128) -> u128 {
    let mut rem: u128 = 0;
    for &byte in pick_hash.as_bytes() {
        rem = (rem * 256 + byte as u128) % span;
    }
    rem
}

/// Render the digest as a base-10 unsigned integer.
///
/// Digests are 256-bit, beyond any machine integer, so this does repeated
/// multiply-by-256 over a little-endian decimal digit accumulator.
fn digest_to_decimal(digest: &Digest) -> String {
    let mut digits = vec![0u8];
    for &byte in digest.as_bytes() {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            let v = (*digit as u32) * 256 + carry;
            *digit = (v % 10) as u8;
            carry = v / 10;
        }
        while carry > 0 {
            digits.push((carry % 10) as u8);
            carry /= 10;
        }
    }
    digits.iter().rev().map(|d| char::from(b'0' + d)).collect()
}
