//! The user-chosen secret that seeds the commitment.

use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Why a candidate secret was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("secret is empty")]
    Empty,

    #[error("secret contains a space character")]
    ContainsSpace,
}

/// A validated secret: non-empty and free of space characters.
///
/// Only the literal space `' '` is forbidden. The published contract is
/// exactly that narrow — tabs and other whitespace are accepted — so the
/// check must not be generalized. The inner string is wiped from memory
/// when the value is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    pub fn parse(input: &str) -> Result<Self, SecretError> {
        if input.contains(' ') {
            return Err(SecretError::ContainsSpace);
        }
        if input.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(input.to_string()))
    }

    /// Borrow the secret text for hashing.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the secret itself.
        f.write_str("Secret(..)")
    }
}
