//! Roster hashing — the commitment computed at seal time.
//!
//! The hash commits to the event id and the exact participant set (names
//! and exclusion lists, in registration order). Credentials are secrets
//! and deliberately excluded. A persisted assignment carries this hash as
//! `roster_hash`, so an organizer can later prove which roster a draw ran
//! against.

use giftmatch_types::{EventId, Participant, SealedRoster};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash over the ordered participant set.
///
/// The hash commits to:
/// - Event ID
/// - Number of participants
/// - Each participant's name and exclusion set (length-prefixed to keep
///   the encoding unambiguous)
#[must_use]
pub fn compute_roster_hash(event_id: EventId, participants: &[Participant]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"giftmatch:roster:v1:");
    hasher.update(event_id.0.as_bytes());
    hasher.update((participants.len() as u64).to_le_bytes());

    for participant in participants {
        hasher.update((participant.name.len() as u64).to_le_bytes());
        hasher.update(participant.name.as_bytes());
        hasher.update((participant.exclusions.len() as u64).to_le_bytes());
        for excluded in &participant.exclusions {
            hasher.update((excluded.len() as u64).to_le_bytes());
            hasher.update(excluded.as_bytes());
        }
    }

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Verify that a sealed roster's stored hash matches its contents.
#[must_use]
pub fn verify_roster_hash(roster: &SealedRoster) -> bool {
    compute_roster_hash(roster.event_id, &roster.participants) == roster.roster_hash
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::Utc;
    use giftmatch_types::Credential;

    use super::*;

    fn participant(name: &str, exclusions: &[&str]) -> Participant {
        Participant {
            name: name.to_string(),
            exclusions: exclusions.iter().map(ToString::to_string).collect::<BTreeSet<_>>(),
            credential: Credential::from_code("123456"),
        }
    }

    #[test]
    fn hash_is_deterministic() {
        let event = EventId::new();
        let roster = vec![participant("Alice", &["Bob"]), participant("Bob", &[])];
        assert_eq!(
            compute_roster_hash(event, &roster),
            compute_roster_hash(event, &roster)
        );
    }

    #[test]
    fn hash_ignores_credentials() {
        let event = EventId::new();
        let mut a = participant("Alice", &[]);
        let b = vec![a.clone()];
        a.credential = Credential::from_code("999999");
        assert_eq!(
            compute_roster_hash(event, &[a]),
            compute_roster_hash(event, &b)
        );
    }

    #[test]
    fn different_events_different_hash() {
        let roster = vec![participant("Alice", &[])];
        assert_ne!(
            compute_roster_hash(EventId::new(), &roster),
            compute_roster_hash(EventId::new(), &roster)
        );
    }

    #[test]
    fn exclusions_affect_hash() {
        let event = EventId::new();
        assert_ne!(
            compute_roster_hash(event, &[participant("Alice", &["Bob"])]),
            compute_roster_hash(event, &[participant("Alice", &[])])
        );
    }

    #[test]
    fn registration_order_affects_hash() {
        let event = EventId::new();
        let ab = vec![participant("Alice", &[]), participant("Bob", &[])];
        let ba = vec![participant("Bob", &[]), participant("Alice", &[])];
        assert_ne!(
            compute_roster_hash(event, &ab),
            compute_roster_hash(event, &ba)
        );
    }

    #[test]
    fn tampered_roster_fails_verification() {
        let event = EventId::new();
        let participants = vec![participant("Alice", &[]), participant("Bob", &[])];
        let mut sealed = SealedRoster {
            event_id: event,
            roster_hash: compute_roster_hash(event, &participants),
            participants,
            sealed_at: Utc::now(),
        };
        assert!(verify_roster_hash(&sealed));

        sealed.roster_hash[0] ^= 0xFF; // Tamper
        assert!(!verify_roster_hash(&sealed));
    }
}
