//! Error types for the GiftMatch exchange matcher.
//!
//! All errors use the `GM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Roster errors
//! - 2xx: Manifest / ingestion errors
//! - 3xx: Validation errors
//! - 4xx: Draw errors
//! - 5xx: Store / lookup errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::EventId;

/// Central error enum for all GiftMatch operations.
#[derive(Debug, Error)]
pub enum GiftmatchError {
    // =================================================================
    // Roster Errors (1xx)
    // =================================================================
    /// Fewer participants than the configured minimum.
    #[error("GM_ERR_100: Insufficient participants: have {count}, need at least {min}")]
    InsufficientParticipants { count: usize, min: usize },

    /// A participant name was empty or whitespace-only.
    #[error("GM_ERR_101: Participant name must not be empty")]
    EmptyParticipantName,

    /// The roster has been sealed; no further registration is allowed.
    #[error("GM_ERR_102: Roster already sealed")]
    RosterAlreadySealed,

    /// The roster is at its participant capacity.
    #[error("GM_ERR_103: Roster full: at most {max} participants")]
    RosterFull { max: usize },

    // =================================================================
    // Manifest Errors (2xx)
    // =================================================================
    /// The ingestion manifest was not parseable or missing required fields.
    #[error("GM_ERR_200: Malformed manifest: {reason}")]
    MalformedManifest { reason: String },

    // =================================================================
    // Validation Errors (3xx)
    // =================================================================
    /// One or more exclusion lists reference unregistered participants.
    #[error("GM_ERR_300: Invalid exclusions: {details}")]
    InvalidExclusion { details: String },

    // =================================================================
    // Draw Errors (4xx)
    // =================================================================
    /// The retry budget was exhausted without finding a valid assignment.
    #[error("GM_ERR_400: No valid assignment found after {attempts} attempts")]
    InfeasibleConstraints { attempts: u32 },

    // =================================================================
    // Store / Lookup Errors (5xx)
    // =================================================================
    /// No persisted record exists for this giver.
    #[error("GM_ERR_500: No assignment found for {giver}")]
    AssignmentNotFound { giver: String },

    /// The presented credential does not match the stored one.
    #[error("GM_ERR_501: Credential mismatch")]
    CredentialMismatch,

    /// The event is unknown to the registry (never created, or disposed).
    #[error("GM_ERR_502: Event not found: {0}")]
    EventNotFound(EventId),

    /// A recomputed digest did not match the stored one — tamper evidence.
    #[error("GM_ERR_503: Digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },

    /// The export violates a structural invariant (bijection, fixed point, ...).
    #[error("GM_ERR_504: Export invariant violation: {reason}")]
    ExportInvariant { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("GM_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("GM_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// I/O error (disk).
    #[error("GM_ERR_902: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GiftmatchError>;

// Conversion from std::io::Error
impl From<std::io::Error> for GiftmatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// Conversion from serde_json::Error (manifest parsing maps this
// explicitly to MalformedManifest instead; this covers record I/O).
impl From<serde_json::Error> for GiftmatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = GiftmatchError::InsufficientParticipants { count: 1, min: 2 };
        let msg = format!("{err}");
        assert!(msg.starts_with("GM_ERR_100"), "Got: {msg}");
    }

    #[test]
    fn credential_mismatch_does_not_leak() {
        let msg = format!("{}", GiftmatchError::CredentialMismatch);
        assert_eq!(msg, "GM_ERR_501: Credential mismatch");
    }

    #[test]
    fn infeasible_display_contains_attempts() {
        let err = GiftmatchError::InfeasibleConstraints { attempts: 1000 };
        let msg = format!("{err}");
        assert!(msg.contains("GM_ERR_400"));
        assert!(msg.contains("1000"));
    }

    #[test]
    fn all_errors_have_gm_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(GiftmatchError::EmptyParticipantName),
            Box::new(GiftmatchError::RosterAlreadySealed),
            Box::new(GiftmatchError::RosterFull { max: 10 }),
            Box::new(GiftmatchError::MalformedManifest {
                reason: "missing field `name`".into(),
            }),
            Box::new(GiftmatchError::InvalidExclusion {
                details: "Alice references unknown [Dave]".into(),
            }),
            Box::new(GiftmatchError::AssignmentNotFound {
                giver: "Alice".into(),
            }),
            Box::new(GiftmatchError::EventNotFound(EventId::new())),
            Box::new(GiftmatchError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("GM_ERR_"),
                "Error missing GM_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GiftmatchError = io.into();
        assert!(matches!(err, GiftmatchError::Io(_)));
    }
}
