use thiserror::Error;

/// A stage rejected its inputs before any hashing took place.
///
/// Audit mismatches are not errors — they are legitimate outcomes and live
/// in [`crate::AuditOutcome`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The secret contains a space character, the one forbidden character.
    #[error("secret contains a space character")]
    ContainsWhitespace,

    /// Derivation needs a usable secret and none was supplied.
    #[error("secret is missing or invalid")]
    MissingSecret,

    /// The requested range is inverted.
    #[error("invalid range: max {max} is below min {min}")]
    InvalidRange { min: i64, max: i64 },

    /// A derivation was requested for zero values.
    #[error("invalid count: {0} (at least one value must be drawn)")]
    InvalidCount(u32),
}
