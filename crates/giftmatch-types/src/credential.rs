//! Participant credentials.
//!
//! A credential is a fixed-length random numeric string issued at
//! registration time and used later for self-service lookup of one's own
//! assignment. The ~1M code space with no rate limiting is deliberately
//! weak: this is a shared-secret-lite mechanism for casual identity
//! confirmation between friends, **not** a security boundary.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{CREDENTIAL_CHARSET, CREDENTIAL_LEN};

/// A short numeric secret issued per participant at registration.
///
/// Serializes as a bare string so persisted records match the wire format
/// `{"giver": ..., "receiver": ..., "credential": "042917"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Generate a fresh credential from the given RNG.
    ///
    /// Uniform pseudorandomness is sufficient; the source only needs to be
    /// non-adversarial.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..CREDENTIAL_LEN)
            .map(|_| char::from(CREDENTIAL_CHARSET[rng.gen_range(0..CREDENTIAL_CHARSET.len())]))
            .collect();
        Self(code)
    }

    /// Wrap an already-issued code (used when reloading persisted records).
    #[must_use]
    pub fn from_code(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Compare against a code presented at lookup time.
    #[must_use]
    pub fn matches(&self, presented: &str) -> bool {
        self.0 == presented
    }

    /// Whether this credential has the issued shape: exactly
    /// [`CREDENTIAL_LEN`] decimal digits.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == CREDENTIAL_LEN && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
