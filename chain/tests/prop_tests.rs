use proptest::prelude::*;

use fairdraw_chain::{audit, commit, compute_entropy_hash, derive, AuditOutcome};
use fairdraw_types::ClockTime;

/// Secrets for property runs: printable ASCII above the space character,
/// so they are always non-empty and space-free.
fn secret_strategy() -> impl Strategy<Value = String> {
    "[!-~]{1,32}"
}

proptest! {
    /// Every derived value lies within the requested range, inclusive.
    #[test]
    fn derived_values_within_range(
        secret in secret_strategy(),
        feed in ".{0,40}",
        date in ".{0,16}",
        count in 1u32..32,
        min in -10_000i64..10_000,
        width in 0i64..50_000,
    ) {
        let entropy = compute_entropy_hash(&[feed.as_str()], &date);
        let max = min + width;
        let result = derive(&entropy, &secret, count, min, max).unwrap();
        prop_assert_eq!(result.values.len(), count as usize);
        for value in &result.values {
            prop_assert!((min..=max).contains(value));
        }
    }

    /// Derivation is a pure function: identical inputs, identical outputs.
    #[test]
    fn derivation_is_deterministic(
        secret in secret_strategy(),
        feed in ".{0,40}",
        count in 1u32..16,
        min in -1_000i64..1_000,
        width in 0i64..5_000,
    ) {
        let entropy = compute_entropy_hash(&[feed.as_str()], "01.01.2026");
        let a = derive(&entropy, &secret, count, min, min + width).unwrap();
        let b = derive(&entropy, &secret, count, min, min + width).unwrap();
        prop_assert_eq!(a, b);
    }

    /// The entropy hash equals the digest of the plain concatenation.
    #[test]
    fn entropy_matches_concatenation(
        a in ".{0,30}",
        b in ".{0,30}",
        date in ".{0,16}",
    ) {
        let joined = format!("{a}{b}{date}");
        prop_assert_eq!(
            compute_entropy_hash(&[a.as_str(), b.as_str()], &date),
            fairdraw_crypto::sha256_hex(&joined)
        );
    }

    /// Re-committing with a prior record never shifts the seal timestamp.
    #[test]
    fn commit_seal_is_idempotent(
        secret in secret_strategy(),
        first_time in 0u32..86_400,
        later_time in 0u32..86_400,
    ) {
        let first = commit(&secret, None, ClockTime::from_secs_of_day(first_time))
            .unwrap()
            .unwrap();
        let second = commit(
            &secret,
            Some(&first),
            ClockTime::from_secs_of_day(later_time),
        )
        .unwrap()
        .unwrap();
        prop_assert_eq!(second.committed_at, first.committed_at);
        prop_assert_eq!(second.vault_hash, first.vault_hash);
    }

    /// Committing, deriving, and auditing with the same secret verifies.
    #[test]
    fn honest_chain_always_verifies(
        secret in secret_strategy(),
        feed in ".{0,40}",
        count in 1u32..8,
    ) {
        let entropy = compute_entropy_hash(&[feed.as_str()], "01.01.2026");
        let record = commit(&secret, None, ClockTime::MIDNIGHT).unwrap().unwrap();
        let derivation = derive(&entropy, &secret, count, 1, 100).unwrap();

        let outcome = audit(
            &secret,
            Some(&record),
            &entropy,
            Some(&derivation.master_hash),
        )
        .unwrap();

        prop_assert_eq!(
            outcome,
            AuditOutcome::Verified { committed_at: ClockTime::MIDNIGHT }
        );
    }

    /// Auditing with a different secret never verifies.
    #[test]
    fn wrong_secret_never_verifies(
        secret in secret_strategy(),
        other in secret_strategy(),
        feed in ".{0,40}",
    ) {
        prop_assume!(secret != other);
        let entropy = compute_entropy_hash(&[feed.as_str()], "01.01.2026");
        let record = commit(&secret, None, ClockTime::MIDNIGHT).unwrap().unwrap();
        let derivation = derive(&entropy, &secret, 1, 1, 100).unwrap();

        let outcome = audit(
            &other,
            Some(&record),
            &entropy,
            Some(&derivation.master_hash),
        )
        .unwrap();

        prop_assert_eq!(outcome, AuditOutcome::VaultMismatch);
    }
}
