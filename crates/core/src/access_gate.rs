//! Access-code check in front of the add-project form.
//!
//! This is a soft gate, not authentication. The digest comparison happens on
//! the client, uses plain string equality (not constant-time), has no lockout
//! or attempt limiting, and the store endpoints never consult it. Anyone who
//! forges the session flag or calls the endpoints directly bypasses it. It
//! exists to keep casual visitors away from the form.

use sha2::{Digest, Sha256};

/// Generic message shown for a rejected code. Never says why it failed.
pub const INVALID_ACCESS_CODE: &str = "Invalid access code";

/// Holds the one preconfigured SHA-256 digest the gate accepts.
#[derive(Clone)]
pub struct AccessGate {
    expected_digest: String,
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("expected_digest", &"<redacted>")
            .finish()
    }
}

impl AccessGate {
    /// Build a gate from a hex digest (surrounding whitespace ignored,
    /// case-insensitive).
    pub fn new(expected_digest: &str) -> Self {
        Self {
            expected_digest: expected_digest.trim().to_ascii_lowercase(),
        }
    }

    /// Returns `true` when the digest of `candidate` equals the configured one.
    ///
    /// The candidate is hashed exactly as typed.
    pub fn verify(&self, candidate: &str) -> bool {
        digest_hex(candidate) == self.expected_digest
    }
}

/// Lowercase hex SHA-256 of a UTF-8 string (64 chars).
pub fn digest_hex(input: &str) -> String {
    let hash = Sha256::digest(input.as_bytes());
    format!("{hash:x}")
}
