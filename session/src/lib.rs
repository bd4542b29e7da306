//! Session-scoped state for the FAIRDRAW chain.
//!
//! The chain stages are pure; the one piece of mutable state in the scheme
//! (the sealed commitment and the last master hash) lives here, owned by
//! whatever hosts the session. [`Session`] is the driver that routes stage
//! results into that state: sealing, retraction on invalid input, and
//! master-hash recording each happen in exactly one place.

pub mod session;
pub mod state;

pub use session::Session;
pub use state::SessionState;
