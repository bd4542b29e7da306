//! The FAIRDRAW commitment chain.
//!
//! Four stages compose one auditable pipeline:
//! 1. **commitment** — seal a user secret as a vault hash.
//! 2. **entropy** — canonicalize external data feeds into an entropy hash.
//! 3. **derivation** — combine vault secret and entropy hash into a master
//!    hash and expand it into bounded integers.
//! 4. **audit** — recompute every hash from the disclosed secret and
//!    compare bit-for-bit against the recorded values.
//!
//! Every stage is a pure function over strings and integers. The only
//! mutable state in the scheme (the commit record and the last master
//! hash) is owned by the caller's session layer, never by this crate.

pub mod audit;
pub mod commitment;
pub mod derivation;
pub mod entropy;
pub mod error;

pub use audit::{audit, AuditOutcome};
pub use commitment::{commit, CommitRecord};
pub use derivation::{derive, derive_with_trace, Derivation, DerivationTrace};
pub use entropy::compute_entropy_hash;
pub use error::ValidationError;
