//! JSON HTTP API for the FAIRDRAW chain.
//!
//! Endpoints mirror the four chain calls plus the session record:
//! - `POST /v1/commit` — seal or retract a session secret
//! - `POST /v1/entropy` — canonicalize entropy feeds into a digest
//! - `POST /v1/derive` — run a derivation (optionally with a full trace)
//! - `POST /v1/audit` — recompute and compare the chain
//! - `GET /v1/session/{id}` — the session's stored record
//!
//! Validation failures map to HTTP 400. Audit mismatches are 200 responses:
//! they are legitimate outcomes, not errors.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::{AppState, RpcServer};
