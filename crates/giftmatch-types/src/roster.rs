//! Sealed roster — the immutable input to the draw engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EventId, Participant};

/// A validated, immutable snapshot of one event's roster.
///
/// Produced by the ingress crate once registration is complete and
/// exclusions have been validated. The draw engine only ever sees sealed
/// rosters; the `roster_hash` commits to the exact participant set so a
/// persisted assignment can be traced back to its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SealedRoster {
    /// The event this roster belongs to.
    pub event_id: EventId,
    /// Participants in registration order. Giver iteration during the draw
    /// follows this order.
    pub participants: Vec<Participant>,
    /// SHA-256 hash committing to the event id, names, and exclusion sets.
    pub roster_hash: [u8; 32],
    /// When this roster was sealed.
    pub sealed_at: DateTime<Utc>,
}

impl SealedRoster {
    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster holds no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Find a participant by name.
    #[must_use]
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::Credential;

    use super::*;

    fn sealed(names: &[&str]) -> SealedRoster {
        SealedRoster {
            event_id: EventId::new(),
            participants: names
                .iter()
                .map(|n| Participant {
                    name: (*n).to_string(),
                    exclusions: BTreeSet::new(),
                    credential: Credential::from_code("123456"),
                })
                .collect(),
            roster_hash: [0u8; 32],
            sealed_at: Utc::now(),
        }
    }

    #[test]
    fn lookup_by_name() {
        let roster = sealed(&["Alice", "Bob"]);
        assert!(roster.participant("Alice").is_some());
        assert!(roster.participant("alice").is_none(), "names are case-sensitive");
        assert!(roster.participant("Dave").is_none());
    }

    #[test]
    fn len_and_empty() {
        assert!(sealed(&[]).is_empty());
        assert_eq!(sealed(&["Alice", "Bob", "Charlie"]).len(), 3);
    }

    #[test]
    fn preserves_registration_order() {
        let roster = sealed(&["Charlie", "Alice", "Bob"]);
        let names: Vec<&str> = roster.participants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Charlie", "Alice", "Bob"]);
    }
}
