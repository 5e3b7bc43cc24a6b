//! The storage collaborator contract, and its in-memory implementation.
//!
//! The draw engine only produces structures; a [`RecordStore`] decides how
//! they survive. The contract is deliberately narrow: save one export per
//! event, retrieve per-giver records keyed by giver name, and answer
//! credentialed lookups. The storage medium is the implementation's
//! business.

use std::collections::HashMap;

use giftmatch_types::{
    EventId, GiftmatchError, MasterRecord, PairingExport, PairingRecord, Result,
};

/// Durable storage for pairing exports, namespaced per event.
pub trait RecordStore {
    /// Persist the full export for an event, replacing any previous one.
    fn save_export(&mut self, event_id: EventId, export: &PairingExport) -> Result<()>;

    /// Retrieve the per-giver record.
    ///
    /// # Errors
    /// [`GiftmatchError::AssignmentNotFound`] when no record exists for
    /// `giver` under this event.
    fn record(&self, event_id: EventId, giver: &str) -> Result<PairingRecord>;

    /// Retrieve the aggregate organizer record for an event.
    ///
    /// # Errors
    /// [`GiftmatchError::EventNotFound`] when nothing was persisted for
    /// this event.
    fn master(&self, event_id: EventId) -> Result<MasterRecord>;

    /// Verify a credential and return the giver's receiver.
    ///
    /// The credential is only compared once the record is found: an unknown
    /// giver reports [`AssignmentNotFound`], a known giver with a wrong
    /// code reports [`CredentialMismatch`] — never the receiver.
    ///
    /// [`AssignmentNotFound`]: GiftmatchError::AssignmentNotFound
    /// [`CredentialMismatch`]: GiftmatchError::CredentialMismatch
    fn lookup(&self, event_id: EventId, giver: &str, presented: &str) -> Result<String> {
        let record = self.record(event_id, giver)?;
        if !record.credential.matches(presented) {
            return Err(GiftmatchError::CredentialMismatch);
        }
        Ok(record.receiver)
    }
}

/// In-memory record store, for tests and single-process embedding.
#[derive(Default)]
pub struct MemoryStore {
    exports: HashMap<EventId, PairingExport>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events with a persisted export.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exports.len()
    }

    /// Whether no event has been persisted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn save_export(&mut self, event_id: EventId, export: &PairingExport) -> Result<()> {
        self.exports.insert(event_id, export.clone());
        Ok(())
    }

    fn record(&self, event_id: EventId, giver: &str) -> Result<PairingRecord> {
        self.exports
            .get(&event_id)
            .and_then(|export| export.record_for(giver))
            .cloned()
            .ok_or_else(|| GiftmatchError::AssignmentNotFound {
                giver: giver.to_string(),
            })
    }

    fn master(&self, event_id: EventId) -> Result<MasterRecord> {
        self.exports
            .get(&event_id)
            .map(|export| export.master.clone())
            .ok_or(GiftmatchError::EventNotFound(event_id))
    }
}
