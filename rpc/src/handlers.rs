//! RPC request handlers and their wire types.

use crate::error::RpcError;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::Json;
use fairdraw_chain::{compute_entropy_hash, AuditOutcome, DerivationTrace};
use fairdraw_session::{Session, SessionState};
use fairdraw_types::{ClockTime, Digest, SystemClock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// ── Commit ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CommitRequest {
    /// Session identifier; created on first use.
    pub session: String,
    /// The secret to seal. An empty string clears the commitment.
    pub secret: String,
}

#[derive(Debug, Serialize)]
pub struct CommitResponse {
    pub committed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_hash: Option<Digest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<ClockTime>,
}

pub async fn commit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommitRequest>,
) -> Result<Json<CommitResponse>, RpcError> {
    let mut sessions = state.sessions.lock().expect("session registry poisoned");
    let entry = sessions.entry(req.session.clone()).or_default();

    let mut session = Session::from_state(entry.clone(), SystemClock);
    let result = session.commit(&req.secret);
    // Persist before surfacing the result: a whitespace rejection must
    // still retract the stored commitment.
    *entry = session.into_state();

    let record = result?;
    debug!(session = %req.session, committed = record.is_some(), "commit handled");
    Ok(Json(match record {
        Some(record) => CommitResponse {
            committed: true,
            vault_hash: Some(record.vault_hash),
            committed_at: Some(record.committed_at),
        },
        None => CommitResponse {
            committed: false,
            vault_hash: None,
            committed_at: None,
        },
    }))
}

// ── Entropy ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct EntropyRequest {
    /// Ordered source texts; order is part of the hash contract.
    pub sources: Vec<String>,
    /// `DD.MM.YYYY` stamp; today's date when omitted.
    #[serde(default)]
    pub date_stamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntropyResponse {
    pub entropy_hash: Digest,
    pub date_stamp: String,
}

pub async fn entropy(
    Json(req): Json<EntropyRequest>,
) -> Result<Json<EntropyResponse>, RpcError> {
    let date_stamp = req
        .date_stamp
        .unwrap_or_else(fairdraw_utils::current_date_stamp);
    let sources: Vec<&str> = req.sources.iter().map(String::as_str).collect();
    let entropy_hash = compute_entropy_hash(&sources, &date_stamp);
    Ok(Json(EntropyResponse {
        entropy_hash,
        date_stamp,
    }))
}

// ── Derive ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeriveRequest {
    pub session: String,
    pub secret: String,
    pub entropy_hash: Digest,
    pub count: u32,
    pub range_min: i64,
    pub range_max: i64,
    /// Include the per-index arithmetic trace in the response.
    #[serde(default)]
    pub trace: bool,
}

#[derive(Debug, Serialize)]
pub struct DeriveResponse {
    pub master_hash: Digest,
    pub values: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<DerivationTrace>>,
}

pub async fn derive(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeriveRequest>,
) -> Result<Json<DeriveResponse>, RpcError> {
    let mut sessions = state.sessions.lock().expect("session registry poisoned");
    let entry = sessions.entry(req.session.clone()).or_default();

    let mut session = Session::from_state(entry.clone(), SystemClock);
    let result = if req.trace {
        session
            .derive_with_trace(
                &req.entropy_hash,
                &req.secret,
                req.count,
                req.range_min,
                req.range_max,
            )
            .map(|(derivation, trace)| (derivation, Some(trace)))
    } else {
        session
            .derive(
                &req.entropy_hash,
                &req.secret,
                req.count,
                req.range_min,
                req.range_max,
            )
            .map(|derivation| (derivation, None))
    };
    *entry = session.into_state();

    let (derivation, trace) = result?;
    debug!(session = %req.session, count = req.count, "derivation handled");
    Ok(Json(DeriveResponse {
        master_hash: derivation.master_hash,
        values: derivation.values,
        trace,
    }))
}

// ── Audit ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AuditRequest {
    pub session: String,
    /// The disclosed secret.
    pub secret: String,
    pub entropy_hash: Digest,
}

pub async fn audit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AuditRequest>,
) -> Result<Json<AuditOutcome>, RpcError> {
    let outcome = {
        let sessions = state.sessions.lock().expect("session registry poisoned");
        let stored = sessions.get(&req.session).cloned().unwrap_or_default();
        let session = Session::from_state(stored, SystemClock);
        session.audit(&req.secret, &req.entropy_hash)?
    };

    // Presentation pacing only; the outcome above is already fixed.
    if !state.audit_delay.is_zero() {
        tokio::time::sleep(state.audit_delay).await;
    }

    debug!(session = %req.session, ?outcome, "audit handled");
    Ok(Json(outcome))
}

// ── Session record ───────────────────────────────────────────────────────

pub async fn session_state(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionState>, RpcError> {
    let sessions = state.sessions.lock().expect("session registry poisoned");
    sessions
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(RpcError::SessionNotFound(id))
}
