//! Cryptographic primitives for the FAIRDRAW protocol.
//!
//! - **SHA-256** over UTF-8 strings, lowercase hex encoded — the single
//!   primitive every stage of the commitment chain composes.

pub mod hash;

pub use hash::{sha256_hex, sha256_hex_multi};
