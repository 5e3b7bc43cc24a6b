//! Assignment digest — commitment over the pairing map.
//!
//! `SHA-256(domain_sep || event_id || num_pairs || for each pair: giver || receiver)`
//!
//! Pairs are iterated in the `BTreeMap`'s sorted order, so the digest is a
//! pure function of the pairing content. The store's audit module
//! recomputes it to detect tampered exports.

use std::collections::BTreeMap;

use giftmatch_types::{Assignment, EventId};
use sha2::{Digest, Sha256};

/// Compute the digest over a pairing map.
#[must_use]
pub fn compute_assignment_digest(
    event_id: EventId,
    pairings: &BTreeMap<String, String>,
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"giftmatch:assignment:v1:");
    hasher.update(event_id.0.as_bytes());
    hasher.update((pairings.len() as u64).to_le_bytes());

    for (giver, receiver) in pairings {
        hasher.update((giver.len() as u64).to_le_bytes());
        hasher.update(giver.as_bytes());
        hasher.update((receiver.len() as u64).to_le_bytes());
        hasher.update(receiver.as_bytes());
    }

    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Verify that an assignment's stored digest matches its pairing map.
#[must_use]
pub fn verify_assignment_digest(assignment: &Assignment) -> bool {
    compute_assignment_digest(assignment.event_id, &assignment.pairings)
        == assignment.assignment_digest
}
