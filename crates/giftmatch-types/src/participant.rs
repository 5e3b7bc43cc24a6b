//! Participant model and exclusion validation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Credential, GiftmatchError, Result};

/// One registered participant: a unique case-sensitive name, the set of
/// names this participant must not draw, and the credential issued at
/// registration.
///
/// Exclusions are enforced symmetrically at draw time: if Alice lists Bob,
/// neither Alice→Bob nor Bob→Alice can occur, regardless of whether Bob
/// lists Alice back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name; doubles as the identity and record key.
    pub name: String,
    /// Names this participant must not be paired with (either direction).
    pub exclusions: BTreeSet<String>,
    /// Lookup credential issued at registration.
    pub credential: Credential,
}

impl Participant {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        exclusions: impl IntoIterator<Item = String>,
        credential: Credential,
    ) -> Self {
        Self {
            name: name.into(),
            exclusions: exclusions.into_iter().collect(),
            credential,
        }
    }

    /// Whether `receiver` is an acceptable draw for this participant,
    /// checking both exclusion directions and self-assignment.
    #[must_use]
    pub fn may_give_to(&self, receiver: &Participant) -> bool {
        self.name != receiver.name
            && !self.exclusions.contains(&receiver.name)
            && !receiver.exclusions.contains(&self.name)
    }
}

/// Check that every name in any participant's exclusion set is itself a
/// registered participant.
///
/// Reports **all** offending participants, not just the first, so a bad
/// manifest can be fixed in one pass. Idempotent over an unchanged slice.
///
/// # Errors
/// Returns [`GiftmatchError::InvalidExclusion`] naming each participant and
/// the unknown names it references.
pub fn validate_exclusions(participants: &[Participant]) -> Result<()> {
    let known: BTreeSet<&str> = participants.iter().map(|p| p.name.as_str()).collect();

    let mut offenders: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for participant in participants {
        let unknown: Vec<&str> = participant
            .exclusions
            .iter()
            .map(String::as_str)
            .filter(|name| !known.contains(name))
            .collect();
        if !unknown.is_empty() {
            offenders.insert(&participant.name, unknown);
        }
    }

    if offenders.is_empty() {
        return Ok(());
    }

    let details = offenders
        .iter()
        .map(|(name, unknown)| format!("{name} references unknown [{}]", unknown.join(", ")))
        .collect::<Vec<_>>()
        .join("; ");
    Err(GiftmatchError::InvalidExclusion { details })
}
