//! Event registry — explicit per-event ownership of rosters.
//!
//! One event, one independently-owned roster, never reused. The registry
//! is the only place that holds mutable rosters; there is no ambient
//! "current session". Running the draw consumes the event's roster (the
//! defined disposal point), after which the event lives on only as
//! persisted records answering credentialed lookups.

use std::collections::HashMap;

use giftmatch_ingress::Roster;
use giftmatch_matchcore::{draw_assignment, export_pairings};
use giftmatch_types::{DrawConfig, EventId, GiftmatchError, PairingExport, Result};

use crate::audit::verify_export;
use crate::record_store::RecordStore;

/// Factory and owner of per-event rosters, wired to a record store.
pub struct EventRegistry<S: RecordStore> {
    store: S,
    rosters: HashMap<EventId, Roster>,
}

impl<S: RecordStore> EventRegistry<S> {
    /// Create a registry persisting into `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            rosters: HashMap::new(),
        }
    }

    /// Create a fresh event with an empty roster and return its id.
    pub fn create_event(&mut self) -> EventId {
        let event_id = EventId::new();
        self.rosters.insert(event_id, Roster::new(event_id));
        tracing::info!(event = %event_id, "Event created");
        event_id
    }

    /// Borrow the roster of an open event.
    ///
    /// # Errors
    /// [`GiftmatchError::EventNotFound`] if the event was never created,
    /// already drawn, or disposed.
    pub fn roster(&self, event_id: EventId) -> Result<&Roster> {
        self.rosters
            .get(&event_id)
            .ok_or(GiftmatchError::EventNotFound(event_id))
    }

    /// Mutably borrow the roster of an open event.
    ///
    /// # Errors
    /// [`GiftmatchError::EventNotFound`] as for [`roster`](Self::roster).
    pub fn roster_mut(&mut self, event_id: EventId) -> Result<&mut Roster> {
        self.rosters
            .get_mut(&event_id)
            .ok_or(GiftmatchError::EventNotFound(event_id))
    }

    /// Parse a manifest document and bulk-load it into an event's roster.
    ///
    /// # Errors
    /// - [`GiftmatchError::EventNotFound`] for unknown events
    /// - [`GiftmatchError::MalformedManifest`] for non-conforming documents;
    ///   the roster is left unchanged
    pub fn load_manifest(&mut self, event_id: EventId, json: &str) -> Result<usize> {
        let manifest = giftmatch_types::Manifest::from_json(json)?;
        self.roster_mut(event_id)?.load_manifest(&manifest)
    }

    /// Run the full draw pipeline for an event:
    /// seal → draw → export → audit → persist.
    ///
    /// Consumes the event's roster — a fresh event is needed for a fresh
    /// draw. The returned export is the caller's copy (e.g. for organizer
    /// display of credentials); an identical copy is now in the store.
    ///
    /// # Errors
    /// Any failure from sealing, drawing, auditing, or persisting. On
    /// failure before persistence, the roster is already consumed: the
    /// event cannot be re-drawn (create a new one), but nothing was stored.
    pub fn run_draw(&mut self, event_id: EventId, config: &DrawConfig) -> Result<PairingExport> {
        let mut roster = self
            .rosters
            .remove(&event_id)
            .ok_or(GiftmatchError::EventNotFound(event_id))?;

        let sealed = roster.seal()?;
        let assignment = draw_assignment(&sealed, config)?;
        let export = export_pairings(&sealed, &assignment)?;
        verify_export(&export)?;
        self.store.save_export(event_id, &export)?;

        tracing::info!(
            event = %event_id,
            participants = sealed.len(),
            attempts = assignment.attempts,
            "Draw persisted, roster disposed"
        );
        Ok(export)
    }

    /// Drop an event's roster without drawing.
    ///
    /// # Errors
    /// [`GiftmatchError::EventNotFound`] if no open roster exists.
    pub fn dispose(&mut self, event_id: EventId) -> Result<()> {
        self.rosters
            .remove(&event_id)
            .map(|_| tracing::info!(event = %event_id, "Event disposed without draw"))
            .ok_or(GiftmatchError::EventNotFound(event_id))
    }

    /// Verify a credential and return the receiver for `giver`.
    ///
    /// # Errors
    /// [`GiftmatchError::AssignmentNotFound`] /
    /// [`GiftmatchError::CredentialMismatch`] per the store contract.
    pub fn lookup(&self, event_id: EventId, giver: &str, presented: &str) -> Result<String> {
        self.store.lookup(event_id, giver, presented)
    }

    /// Number of open (not yet drawn or disposed) events.
    #[must_use]
    pub fn open_events(&self) -> usize {
        self.rosters.len()
    }

    /// Access the underlying record store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
