//! The audit stage: independent recomputation of the whole chain.

use crate::commitment::CommitRecord;
use crate::derivation::master_hash;
use crate::error::ValidationError;
use fairdraw_crypto::sha256_hex;
use fairdraw_types::{ClockTime, Digest, Secret, SecretError};
use serde::{Deserialize, Serialize};

/// The outcome of an audit. Mismatches are legitimate results, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Every hash matched: the chain is untampered.
    Verified { committed_at: ClockTime },
    /// The disclosed secret does not hash to the recorded vault hash.
    VaultMismatch,
    /// The vault matched, but the recomputed master hash differs — the
    /// entropy inputs or the recorded master hash were altered.
    MasterMismatch,
    /// The audit cannot run: no secret disclosed or nothing committed.
    MissingInputs,
}

/// Recompute the chain from the disclosed secret and compare each hash
/// against the recorded values.
///
/// Works from raw inputs only. Recorded hashes are compared, never trusted
/// as intermediates — independent re-derivation is the entire point of the
/// audit. The vault check runs first; the master check only runs once the
/// vault matches.
pub fn audit(
    disclosed_secret: &str,
    recorded_commit: Option<&CommitRecord>,
    entropy_hash: &Digest,
    recorded_master: Option<&Digest>,
) -> Result<AuditOutcome, ValidationError> {
    // Whitespace is checked before any hashing.
    let secret = match Secret::parse(disclosed_secret) {
        Ok(secret) => secret,
        Err(SecretError::ContainsSpace) => return Err(ValidationError::ContainsWhitespace),
        Err(SecretError::Empty) => return Ok(AuditOutcome::MissingInputs),
    };
    let Some(recorded_commit) = recorded_commit else {
        return Ok(AuditOutcome::MissingInputs);
    };

    let new_vault_hash = sha256_hex(secret.expose());
    if new_vault_hash != recorded_commit.vault_hash {
        return Ok(AuditOutcome::VaultMismatch);
    }

    let new_master = master_hash(entropy_hash, &secret);
    match recorded_master {
        Some(recorded) if new_master == *recorded => Ok(AuditOutcome::Verified {
            committed_at: recorded_commit.committed_at,
        }),
        _ => Ok(AuditOutcome::MasterMismatch),
    }
}
