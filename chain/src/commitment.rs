//! The commitment stage: sealing a secret into a vault hash.

use crate::error::ValidationError;
use fairdraw_crypto::sha256_hex;
use fairdraw_types::{ClockTime, Digest, Secret, SecretError};
use serde::{Deserialize, Serialize};

/// A sealed commitment: the vault hash and the time it was first sealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// SHA-256 of the secret, published before any entropy is known.
    pub vault_hash: Digest,
    /// Time of day the seal was first applied. Never shifts while the
    /// session stays committed.
    pub committed_at: ClockTime,
}

/// Seal `secret_input` into a commitment, or clear it.
///
/// - A space anywhere in the input is a `ContainsWhitespace` error; the
///   caller must also retract any existing record (the commitment is
///   withdrawn, not merely left as-is).
/// - An empty input returns `Ok(None)`: the uncommitted state, not an error.
/// - Otherwise the vault hash is recomputed and the seal timestamp comes
///   from `prior` when one exists — re-evaluating with the same secret must
///   never shift `committed_at`.
///
/// `now` is an explicit argument; the stage never reads ambient clocks.
pub fn commit(
    secret_input: &str,
    prior: Option<&CommitRecord>,
    now: ClockTime,
) -> Result<Option<CommitRecord>, ValidationError> {
    let secret = match Secret::parse(secret_input) {
        Ok(secret) => secret,
        Err(SecretError::Empty) => return Ok(None),
        Err(SecretError::ContainsSpace) => return Err(ValidationError::ContainsWhitespace),
    };

    let vault_hash = sha256_hex(secret.expose());
    let committed_at = match prior {
        Some(record) => record.committed_at,
        None => now,
    };

    Ok(Some(CommitRecord {
        vault_hash,
        committed_at,
    }))
}
