//! Export audit — structural verification before an export is trusted.
//!
//! A valid export satisfies, in one pass:
//! - the pairing map is a permutation of its givers with no fixed point
//! - every per-giver record agrees with the master pairing map
//! - the master holds a credential for every giver, and every credential
//!   has the issued shape
//! - the stored assignment digest recomputes from the pairing map
//!
//! The registry runs this between drawing and persisting, so a bug in the
//! draw engine (or a tampered export) can never reach storage.

use std::collections::BTreeSet;

use giftmatch_matchcore::compute_assignment_digest;
use giftmatch_types::{GiftmatchError, PairingExport, Result};

/// Verify an export's structural invariants.
///
/// # Errors
/// - [`GiftmatchError::ExportInvariant`] for bijection/fixed-point/
///   consistency violations
/// - [`GiftmatchError::DigestMismatch`] when the stored digest does not
///   recompute
pub fn verify_export(export: &PairingExport) -> Result<()> {
    let master = &export.master;
    let givers: BTreeSet<&str> = master.pairings.keys().map(String::as_str).collect();

    // Permutation with no fixed points.
    let mut receivers: BTreeSet<&str> = BTreeSet::new();
    for (giver, receiver) in &master.pairings {
        if giver == receiver {
            return Err(GiftmatchError::ExportInvariant {
                reason: format!("{giver} is assigned to themselves"),
            });
        }
        if !givers.contains(receiver.as_str()) {
            return Err(GiftmatchError::ExportInvariant {
                reason: format!("receiver {receiver} is not a giver"),
            });
        }
        if !receivers.insert(receiver) {
            return Err(GiftmatchError::ExportInvariant {
                reason: format!("{receiver} receives more than once"),
            });
        }
    }

    // Per-giver records agree with the master map.
    if export.records.len() != master.pairings.len() {
        return Err(GiftmatchError::ExportInvariant {
            reason: format!(
                "{} records for {} pairings",
                export.records.len(),
                master.pairings.len()
            ),
        });
    }
    for record in &export.records {
        if master.pairings.get(&record.giver) != Some(&record.receiver) {
            return Err(GiftmatchError::ExportInvariant {
                reason: format!("record for {} disagrees with master pairing", record.giver),
            });
        }
        if !record.credential.is_well_formed() {
            return Err(GiftmatchError::ExportInvariant {
                reason: format!("credential for {} is malformed", record.giver),
            });
        }
        if master.credentials.get(&record.giver) != Some(&record.credential) {
            return Err(GiftmatchError::ExportInvariant {
                reason: format!("credential for {} disagrees with master", record.giver),
            });
        }
    }

    // Digest recomputation.
    let recomputed = compute_assignment_digest(master.event_id, &master.pairings);
    if recomputed != master.assignment_digest {
        return Err(GiftmatchError::DigestMismatch {
            expected: hex::encode(master.assignment_digest),
            actual: hex::encode(recomputed),
        });
    }

    Ok(())
}
