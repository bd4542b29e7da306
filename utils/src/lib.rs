//! Shared utilities for the FAIRDRAW protocol.

pub mod logging;
pub mod time;

pub use logging::init_tracing;
pub use time::{current_date_stamp, date_stamp_from_unix};
