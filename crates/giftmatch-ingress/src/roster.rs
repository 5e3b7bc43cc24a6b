//! Roster — the mutable participant registry for one event.
//!
//! A roster collects participants during registration and is consumed by
//! [`seal`](Roster::seal), which produces the immutable [`SealedRoster`]
//! the draw engine runs against. Once sealed, registration is closed.
//!
//! One roster belongs to exactly one event and is never reused; the
//! registry in `giftmatch-store` enforces that ownership.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use giftmatch_types::{
    constants, Credential, EventId, GiftmatchError, Manifest, Participant, Result, SealedRoster,
    validate_exclusions,
};

use crate::sealer::compute_roster_hash;

/// Mutable participant registry for a single event.
#[derive(Debug)]
pub struct Roster {
    /// The event this roster belongs to.
    event_id: EventId,
    /// Participants in registration order.
    participants: Vec<Participant>,
    /// Name → position in `participants`.
    index: HashMap<String, usize>,
    /// Whether the roster has been sealed.
    sealed: bool,
    /// Maximum participants before registration is refused.
    max_participants: usize,
}

impl Roster {
    /// Create an empty roster for the given event.
    #[must_use]
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            participants: Vec::new(),
            index: HashMap::new(),
            sealed: false,
            max_participants: constants::MAX_PARTICIPANTS,
        }
    }

    /// Create a roster with a custom participant cap.
    #[must_use]
    pub fn with_capacity(event_id: EventId, max_participants: usize) -> Self {
        Self {
            event_id,
            participants: Vec::new(),
            index: HashMap::new(),
            sealed: false,
            max_participants,
        }
    }

    /// Register a participant, issuing a fresh credential.
    ///
    /// Re-registering an existing name overwrites its exclusion set and
    /// regenerates its credential, keeping the original registration
    /// position. Exclusion names are **not** validated here — forward
    /// references are allowed until [`seal`](Self::seal).
    ///
    /// # Errors
    /// - [`GiftmatchError::RosterAlreadySealed`] after sealing
    /// - [`GiftmatchError::EmptyParticipantName`] for blank names
    /// - [`GiftmatchError::RosterFull`] at capacity
    pub fn add_participant(
        &mut self,
        name: impl Into<String>,
        exclusions: impl IntoIterator<Item = String>,
    ) -> Result<()> {
        if self.sealed {
            return Err(GiftmatchError::RosterAlreadySealed);
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GiftmatchError::EmptyParticipantName);
        }

        let exclusions: BTreeSet<String> = exclusions.into_iter().collect();
        let credential = Credential::generate(&mut rand::thread_rng());

        if let Some(&pos) = self.index.get(&name) {
            tracing::debug!(
                event = %self.event_id,
                participant = %name,
                "Re-registration: overwriting exclusions, regenerating credential"
            );
            self.participants[pos] = Participant::new(name, exclusions, credential);
            return Ok(());
        }

        if self.participants.len() >= self.max_participants {
            return Err(GiftmatchError::RosterFull {
                max: self.max_participants,
            });
        }

        self.index.insert(name.clone(), self.participants.len());
        self.participants
            .push(Participant::new(name, exclusions, credential));
        Ok(())
    }

    /// Bulk-register every entry of a parsed manifest, all-or-nothing.
    ///
    /// All shape and capacity checks run before the first mutation: a
    /// failed load leaves the roster exactly as it was. Returns the number
    /// of entries applied. Duplicate names (within the manifest or against
    /// existing registrations) follow the overwrite semantics of
    /// [`add_participant`](Self::add_participant).
    ///
    /// # Errors
    /// - [`GiftmatchError::RosterAlreadySealed`] after sealing
    /// - [`GiftmatchError::MalformedManifest`] for blank names
    /// - [`GiftmatchError::RosterFull`] if the distinct new names would
    ///   exceed capacity
    pub fn load_manifest(&mut self, manifest: &Manifest) -> Result<usize> {
        if self.sealed {
            return Err(GiftmatchError::RosterAlreadySealed);
        }

        let mut new_names: BTreeSet<&str> = BTreeSet::new();
        for (idx, entry) in manifest.participants.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(GiftmatchError::MalformedManifest {
                    reason: format!("participant entry {idx} has an empty name"),
                });
            }
            if !self.index.contains_key(&entry.name) {
                new_names.insert(&entry.name);
            }
        }
        if self.participants.len() + new_names.len() > self.max_participants {
            return Err(GiftmatchError::RosterFull {
                max: self.max_participants,
            });
        }

        for entry in &manifest.participants {
            self.add_participant(entry.name.clone(), entry.exclusions.iter().cloned())?;
        }

        tracing::info!(
            event = %self.event_id,
            entries = manifest.len(),
            roster_size = self.participants.len(),
            "Manifest loaded"
        );
        Ok(manifest.len())
    }

    /// Check that every excluded name is a registered participant.
    ///
    /// # Errors
    /// Returns [`GiftmatchError::InvalidExclusion`] naming all offenders.
    pub fn validate_exclusions(&self) -> Result<()> {
        validate_exclusions(&self.participants)
    }

    /// Seal the roster into the immutable input for the draw engine.
    ///
    /// Fail-closed gate: requires at least
    /// [`MIN_PARTICIPANTS`](constants::MIN_PARTICIPANTS) and fully valid
    /// exclusions. On success the roster is closed to further registration
    /// and the returned snapshot carries a hash commitment to its contents.
    ///
    /// # Errors
    /// - [`GiftmatchError::RosterAlreadySealed`] on a second seal
    /// - [`GiftmatchError::InsufficientParticipants`] below the minimum
    /// - [`GiftmatchError::InvalidExclusion`] for dangling exclusion names
    pub fn seal(&mut self) -> Result<SealedRoster> {
        if self.sealed {
            return Err(GiftmatchError::RosterAlreadySealed);
        }
        if self.participants.len() < constants::MIN_PARTICIPANTS {
            return Err(GiftmatchError::InsufficientParticipants {
                count: self.participants.len(),
                min: constants::MIN_PARTICIPANTS,
            });
        }
        self.validate_exclusions()?;

        self.sealed = true;
        let roster_hash = compute_roster_hash(self.event_id, &self.participants);
        tracing::info!(
            event = %self.event_id,
            participants = self.participants.len(),
            roster_hash = hex::encode(&roster_hash[..8]),
            "Roster sealed"
        );
        Ok(SealedRoster {
            event_id: self.event_id,
            participants: self.participants.clone(),
            roster_hash,
            sealed_at: Utc::now(),
        })
    }

    /// The event this roster belongs to.
    #[must_use]
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Whether the roster has been sealed.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Number of registered participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(|p| p.name.as_str())
    }

    /// The credential currently issued to `name`, if registered.
    #[must_use]
    pub fn credential_for(&self, name: &str) -> Option<&Credential> {
        self.index
            .get(name)
            .map(|&pos| &self.participants[pos].credential)
    }
}
