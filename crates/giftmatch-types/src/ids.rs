//! Globally unique identifiers used throughout GiftMatch.
//!
//! Event IDs use UUIDv7 for time-ordered lexicographic sorting. Participants
//! are deliberately keyed by their display name (case-sensitive, unique per
//! roster) rather than a synthetic ID — the name doubles as the lookup key
//! in persisted records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one exchange event (one independent draw).
///
/// Each event owns its roster, assignment, and persisted records; nothing
/// is shared across events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Short hex form for log lines and directory names.
    #[must_use]
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    /// Full hyphen-free form, used as the per-event directory name.
    #[must_use]
    pub fn simple(&self) -> String {
        self.0.simple().to_string()
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event:{}", self.0)
    }
}
