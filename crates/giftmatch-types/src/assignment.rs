//! Assignment — the output of the draw engine.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EventId;

/// The result of one successful draw: a fixed-point-free bijection from
/// every giver to exactly one receiver, with all exclusions respected in
/// both directions.
///
/// Construction happens only inside the draw engine; consumers treat the
/// pairing map as immutable. `roster_hash` ties the assignment back to the
/// sealed roster it was drawn from, and `assignment_digest` commits to the
/// pairing map itself for tamper evidence in persisted exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// The event this assignment belongs to.
    pub event_id: EventId,
    /// Giver → receiver, every participant appearing exactly once on each side.
    pub pairings: BTreeMap<String, String>,
    /// SHA-256 digest over the sorted pairing map.
    pub assignment_digest: [u8; 32],
    /// The `roster_hash` of the sealed roster this was drawn from.
    pub roster_hash: [u8; 32],
    /// Which shuffle round produced this assignment (1-based).
    pub attempts: u32,
    /// When the draw completed.
    pub drawn_at: DateTime<Utc>,
}

impl Assignment {
    /// The receiver assigned to `giver`, if `giver` is part of this event.
    #[must_use]
    pub fn receiver_for(&self, giver: &str) -> Option<&str> {
        self.pairings.get(giver).map(String::as_str)
    }

    /// Number of (giver, receiver) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether the assignment holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(pairs: &[(&str, &str)]) -> Assignment {
        Assignment {
            event_id: EventId::new(),
            pairings: pairs
                .iter()
                .map(|(g, r)| ((*g).to_string(), (*r).to_string()))
                .collect(),
            assignment_digest: [0u8; 32],
            roster_hash: [0u8; 32],
            attempts: 1,
            drawn_at: Utc::now(),
        }
    }

    #[test]
    fn receiver_lookup() {
        let a = assignment(&[("Alice", "Bob"), ("Bob", "Alice")]);
        assert_eq!(a.receiver_for("Alice"), Some("Bob"));
        assert_eq!(a.receiver_for("Bob"), Some("Alice"));
        assert_eq!(a.receiver_for("Dave"), None);
    }

    #[test]
    fn serde_roundtrip() {
        let a = assignment(&[("Alice", "Bob"), ("Bob", "Alice")]);
        let json = serde_json::to_string(&a).unwrap();
        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(a.pairings, back.pairings);
        assert_eq!(a.event_id, back.event_id);
        assert_eq!(a.assignment_digest, back.assignment_digest);
    }
}
