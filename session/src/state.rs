//! The caller-owned session record.

use fairdraw_chain::CommitRecord;
use fairdraw_types::{ClockTime, Digest};
use serde::{Deserialize, Serialize};

/// Everything a hosting session persists between calls: the sealed vault
/// hash with its timestamp, and the master hash of the latest derivation.
///
/// On the wire this is a small JSON object with three optional string
/// fields; absent fields are omitted entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_hash: Option<Digest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<ClockTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_master_hash: Option<Digest>,
}

impl SessionState {
    /// The recorded commitment, present only when both fields are set.
    pub fn commit_record(&self) -> Option<CommitRecord> {
        match (self.vault_hash, self.committed_at) {
            (Some(vault_hash), Some(committed_at)) => Some(CommitRecord {
                vault_hash,
                committed_at,
            }),
            _ => None,
        }
    }

    /// Reset the vault fields to the uncommitted state. The master hash of
    /// an earlier derivation is left untouched.
    pub fn clear_commitment(&mut self) {
        self.vault_hash = None;
        self.committed_at = None;
    }

    pub fn is_committed(&self) -> bool {
        self.commit_record().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_serializes_to_empty_object() {
        let state = SessionState::default();
        assert_eq!(serde_json::to_string(&state).unwrap(), "{}");
    }

    #[test]
    fn json_roundtrip_with_all_fields() {
        let state = SessionState {
            vault_hash: Some(Digest::new([0xAA; 32])),
            committed_at: Some(ClockTime::from_secs_of_day(3661)),
            current_master_hash: Some(Digest::new([0xBB; 32])),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn wire_layout_uses_hex_and_time_strings() {
        let state = SessionState {
            vault_hash: Some(Digest::new([0x01; 32])),
            committed_at: Some(ClockTime::from_secs_of_day(0)),
            current_master_hash: None,
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "vault_hash": "01".repeat(32),
                "committed_at": "00:00:00",
            })
        );
    }

    #[test]
    fn commit_record_requires_both_fields() {
        let mut state = SessionState {
            vault_hash: Some(Digest::new([0x01; 32])),
            ..Default::default()
        };
        assert!(state.commit_record().is_none());

        state.committed_at = Some(ClockTime::MIDNIGHT);
        assert!(state.commit_record().is_some());
    }

    #[test]
    fn clear_commitment_keeps_master_hash() {
        let mut state = SessionState {
            vault_hash: Some(Digest::new([0x01; 32])),
            committed_at: Some(ClockTime::MIDNIGHT),
            current_master_hash: Some(Digest::new([0x02; 32])),
        };
        state.clear_commitment();
        assert!(!state.is_committed());
        assert!(state.current_master_hash.is_some());
    }
}
