//! Export — pure transformation from an assignment to persistable records.
//!
//! Produces one `{giver, receiver, credential}` record per giver plus the
//! aggregate master record. Writing the structures anywhere is the store
//! crate's concern.

use giftmatch_types::{
    Assignment, GiftmatchError, MasterRecord, PairingExport, PairingRecord, Result, SealedRoster,
};

/// Build the persistable export for a drawn assignment.
///
/// # Errors
/// - [`GiftmatchError::Internal`] if the assignment and roster disagree
///   (an assignment drawn from a different roster)
pub fn export_pairings(roster: &SealedRoster, assignment: &Assignment) -> Result<PairingExport> {
    if assignment.event_id != roster.event_id {
        return Err(GiftmatchError::Internal(format!(
            "assignment {} does not belong to roster {}",
            assignment.event_id, roster.event_id
        )));
    }
    if assignment.len() != roster.len() {
        return Err(GiftmatchError::Internal(format!(
            "assignment covers {} givers but roster has {} participants",
            assignment.len(),
            roster.len()
        )));
    }

    let mut records = Vec::with_capacity(roster.len());
    for (giver, receiver) in &assignment.pairings {
        let participant = roster.participant(giver).ok_or_else(|| {
            GiftmatchError::Internal(format!("assignment names unregistered giver {giver}"))
        })?;
        records.push(PairingRecord {
            giver: giver.clone(),
            receiver: receiver.clone(),
            credential: participant.credential.clone(),
        });
    }

    let master = MasterRecord {
        event_id: assignment.event_id,
        pairings: assignment.pairings.clone(),
        credentials: roster
            .participants
            .iter()
            .map(|p| (p.name.clone(), p.credential.clone()))
            .collect(),
        assignment_digest: assignment.assignment_digest,
        drawn_at: assignment.drawn_at,
    };

    Ok(PairingExport { records, master })
}
