//! The session driver: applies stage results to the session record.

use crate::state::SessionState;
use fairdraw_chain::{
    audit, commit, derive, derive_with_trace, AuditOutcome, CommitRecord, Derivation,
    DerivationTrace, ValidationError,
};
use fairdraw_types::{Clock, Digest, SystemClock};
use tracing::debug;

/// Drives one session through the chain, owning its state and clock.
///
/// The stage functions stay pure; every state transition — sealing,
/// retraction, master-hash recording — happens here, exactly once per
/// call. One `Session` per hosted session keeps concurrent sessions
/// isolated by construction.
pub struct Session<C: Clock = SystemClock> {
    state: SessionState,
    clock: C,
}

impl Session<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Session<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: SessionState::default(),
            clock,
        }
    }

    /// Resume a session from previously stored state.
    pub fn from_state(state: SessionState, clock: C) -> Self {
        Self { state, clock }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Commit (or retract) the session secret.
    ///
    /// A whitespace rejection retracts an existing commitment rather than
    /// leaving it in place: the vault fields are cleared before the error
    /// is returned.
    pub fn commit(&mut self, secret_input: &str) -> Result<Option<CommitRecord>, ValidationError> {
        let prior = self.state.commit_record();
        match commit(secret_input, prior.as_ref(), self.clock.now()) {
            Ok(Some(record)) => {
                if prior.is_none() {
                    debug!(committed_at = %record.committed_at, "sealed new commitment");
                }
                self.state.vault_hash = Some(record.vault_hash);
                self.state.committed_at = Some(record.committed_at);
                Ok(Some(record))
            }
            Ok(None) => {
                self.state.clear_commitment();
                Ok(None)
            }
            Err(err) => {
                debug!("commitment retracted on invalid secret");
                self.state.clear_commitment();
                Err(err)
            }
        }
    }

    /// Run a derivation and record its master hash for later audits.
    ///
    /// The recorded master hash is overwritten on every successful run and
    /// left untouched when the derivation fails validation.
    pub fn derive(
        &mut self,
        entropy_hash: &Digest,
        secret_input: &str,
        count: u32,
        range_min: i64,
        range_max: i64,
    ) -> Result<Derivation, ValidationError> {
        let derivation = derive(entropy_hash, secret_input, count, range_min, range_max)?;
        self.state.current_master_hash = Some(derivation.master_hash);
        debug!(master_hash = %derivation.master_hash, count, "derivation recorded");
        Ok(derivation)
    }

    /// Like [`Session::derive`], with the per-index explanation trace.
    pub fn derive_with_trace(
        &mut self,
        entropy_hash: &Digest,
        secret_input: &str,
        count: u32,
        range_min: i64,
        range_max: i64,
    ) -> Result<(Derivation, Vec<DerivationTrace>), ValidationError> {
        let (derivation, trace) =
            derive_with_trace(entropy_hash, secret_input, count, range_min, range_max)?;
        self.state.current_master_hash = Some(derivation.master_hash);
        debug!(master_hash = %derivation.master_hash, count, "derivation recorded");
        Ok((derivation, trace))
    }

    /// Audit the recorded chain against a disclosed secret. Read-only:
    /// audits never change the record they check.
    pub fn audit(
        &self,
        disclosed_secret: &str,
        entropy_hash: &Digest,
    ) -> Result<AuditOutcome, ValidationError> {
        audit(
            disclosed_secret,
            self.state.commit_record().as_ref(),
            entropy_hash,
            self.state.current_master_hash.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairdraw_chain::compute_entropy_hash;
    use fairdraw_nullables::NullClock;
    use fairdraw_types::ClockTime;

    fn entropy() -> Digest {
        compute_entropy_hash(&["feed-a", "feed-b"], "01.01.2026")
    }

    #[test]
    fn first_commit_seals_at_current_time() {
        let clock = NullClock::new(100);
        let mut session = Session::with_clock(&clock);

        let record = session.commit("Sommer2026").unwrap().unwrap();
        assert_eq!(record.committed_at, ClockTime::from_secs_of_day(100));
        assert!(session.state().is_committed());
    }

    #[test]
    fn recommitting_does_not_reseal() {
        let clock = NullClock::new(100);
        let mut session = Session::with_clock(&clock);

        session.commit("Sommer2026").unwrap();
        clock.advance(300);
        let record = session.commit("Sommer2026").unwrap().unwrap();

        assert_eq!(record.committed_at, ClockTime::from_secs_of_day(100));
    }

    #[test]
    fn clearing_then_recommitting_reseals_at_new_time() {
        let clock = NullClock::new(100);
        let mut session = Session::with_clock(&clock);

        session.commit("Sommer2026").unwrap();
        assert_eq!(session.commit("").unwrap(), None);
        assert!(!session.state().is_committed());

        clock.advance(300);
        let record = session.commit("Sommer2026").unwrap().unwrap();
        assert_eq!(record.committed_at, ClockTime::from_secs_of_day(400));
    }

    #[test]
    fn whitespace_secret_retracts_the_commitment() {
        let clock = NullClock::new(100);
        let mut session = Session::with_clock(&clock);

        session.commit("Sommer2026").unwrap();
        assert!(session.state().is_committed());

        let err = session.commit("Sommer 2026").unwrap_err();
        assert_eq!(err, ValidationError::ContainsWhitespace);
        assert!(!session.state().is_committed());
    }

    #[test]
    fn derive_records_the_master_hash() {
        let clock = NullClock::new(0);
        let mut session = Session::with_clock(&clock);

        let derivation = session.derive(&entropy(), "Sommer2026", 5, 1, 100).unwrap();
        assert_eq!(
            session.state().current_master_hash,
            Some(derivation.master_hash)
        );
    }

    #[test]
    fn failed_derive_leaves_recorded_master_untouched() {
        let clock = NullClock::new(0);
        let mut session = Session::with_clock(&clock);

        let derivation = session.derive(&entropy(), "Sommer2026", 5, 1, 100).unwrap();
        let err = session.derive(&entropy(), "Sommer2026", 5, 10, 5).unwrap_err();
        assert_eq!(err, ValidationError::InvalidRange { min: 10, max: 5 });
        assert_eq!(
            session.state().current_master_hash,
            Some(derivation.master_hash)
        );
    }

    #[test]
    fn rederiving_overwrites_the_master_hash() {
        let clock = NullClock::new(0);
        let mut session = Session::with_clock(&clock);

        let first = session.derive(&entropy(), "Sommer2026", 5, 1, 100).unwrap();
        let other_entropy = compute_entropy_hash(&["feed-a"], "02.01.2026");
        let second = session.derive(&other_entropy, "Sommer2026", 5, 1, 100).unwrap();

        assert_ne!(first.master_hash, second.master_hash);
        assert_eq!(
            session.state().current_master_hash,
            Some(second.master_hash)
        );
    }

    #[test]
    fn full_session_flow_verifies() {
        let clock = NullClock::new(43_200);
        let mut session = Session::with_clock(&clock);

        session.commit("Sommer2026").unwrap();
        session.derive(&entropy(), "Sommer2026", 5, 1, 10_000).unwrap();

        let outcome = session.audit("Sommer2026", &entropy()).unwrap();
        assert_eq!(
            outcome,
            AuditOutcome::Verified {
                committed_at: ClockTime::from_secs_of_day(43_200)
            }
        );
    }

    #[test]
    fn audit_on_fresh_session_is_missing_inputs() {
        let clock = NullClock::new(0);
        let session = Session::with_clock(&clock);
        let outcome = session.audit("Sommer2026", &entropy()).unwrap();
        assert_eq!(outcome, AuditOutcome::MissingInputs);
    }

    #[test]
    fn state_roundtrips_through_storage() {
        let clock = NullClock::new(100);
        let mut session = Session::with_clock(&clock);
        session.commit("Sommer2026").unwrap();
        session.derive(&entropy(), "Sommer2026", 3, 1, 49).unwrap();

        // Simulate the host persisting and restoring the session record.
        let json = serde_json::to_string(session.state()).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        let resumed = Session::from_state(restored, &clock);

        let outcome = resumed.audit("Sommer2026", &entropy()).unwrap();
        assert_eq!(
            outcome,
            AuditOutcome::Verified {
                committed_at: ClockTime::from_secs_of_day(100)
            }
        );
    }
}
