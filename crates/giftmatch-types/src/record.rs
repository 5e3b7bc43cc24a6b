//! Persisted record model.
//!
//! The draw engine computes these structures; the store crate decides how
//! and where they are written. Two shapes exist:
//!
//! - [`PairingRecord`]: one per giver, retrievable by `(name, credential)`
//! - [`MasterRecord`]: one per event, the organizer's full audit view

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Credential, EventId};

/// The per-giver record persisted behind the giver's credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingRecord {
    pub giver: String,
    pub receiver: String,
    pub credential: Credential,
}

/// The aggregate per-event record: full pairing map plus all credentials,
/// for organizer verification and audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterRecord {
    /// The event these records belong to.
    pub event_id: EventId,
    /// Giver → receiver for every participant.
    pub pairings: BTreeMap<String, String>,
    /// Credential issued to each participant, keyed by name.
    pub credentials: BTreeMap<String, Credential>,
    /// Digest of the pairing map, recomputable for tamper evidence.
    pub assignment_digest: [u8; 32],
    /// When the underlying draw completed.
    pub drawn_at: DateTime<Utc>,
}

/// Everything the store persists for one event in a single unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairingExport {
    /// One record per giver, in giver-name order.
    pub records: Vec<PairingRecord>,
    /// The aggregate organizer record.
    pub master: MasterRecord,
}

impl PairingExport {
    /// Find the per-giver record for `giver`.
    #[must_use]
    pub fn record_for(&self, giver: &str) -> Option<&PairingRecord> {
        self.records.iter().find(|r| r.giver == giver)
    }
}
