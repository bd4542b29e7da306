//! Fundamental types for the FAIRDRAW protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: SHA-256 digests, validated secrets, commit timestamps, and the
//! clock seam.

pub mod digest;
pub mod secret;
pub mod time;

pub use digest::{Digest, DigestParseError};
pub use secret::{Secret, SecretError};
pub use time::{Clock, ClockTime, ClockTimeParseError, SystemClock};
