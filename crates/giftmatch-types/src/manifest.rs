//! Ingestion manifest — the explicit schema for bulk roster loading.
//!
//! The wire format is a JSON document with a top-level `participants` list;
//! each entry has a required `name` and an optional `exclusions` list:
//!
//! ```json
//! {
//!   "participants": [
//!     { "name": "Alice", "exclusions": ["Bob"] },
//!     { "name": "Bob",   "exclusions": ["Alice"] },
//!     { "name": "Charlie" }
//!   ]
//! }
//! ```
//!
//! Anything that does not conform is rejected at this boundary with a
//! descriptive [`MalformedManifest`](crate::GiftmatchError::MalformedManifest)
//! — never a partial or silent success.

use serde::{Deserialize, Serialize};

use crate::{GiftmatchError, Result};

/// One participant entry in the ingestion manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Required participant name.
    pub name: String,
    /// Optional exclusion list; defaults to empty when absent.
    #[serde(default)]
    pub exclusions: Vec<String>,
}

/// The full ingestion manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub participants: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parse a manifest from a JSON document.
    ///
    /// # Errors
    /// Returns [`GiftmatchError::MalformedManifest`] for unparseable JSON,
    /// a missing `participants` key, an entry missing `name`, or an empty
    /// or whitespace-only name.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Self =
            serde_json::from_str(json).map_err(|err| GiftmatchError::MalformedManifest {
                reason: err.to_string(),
            })?;
        manifest.check_shape()?;
        Ok(manifest)
    }

    /// Structural checks serde cannot express: names must be non-blank.
    fn check_shape(&self) -> Result<()> {
        for (idx, entry) in self.participants.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(GiftmatchError::MalformedManifest {
                    reason: format!("participant entry {idx} has an empty name"),
                });
            }
        }
        Ok(())
    }

    /// Number of entries in the manifest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the manifest lists no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let manifest = Manifest::from_json(
            r#"{"participants": [
                {"name": "Alice", "exclusions": ["Bob", "Charlie"]},
                {"name": "Bob", "exclusions": ["Alice"]},
                {"name": "Charlie", "exclusions": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.participants[0].exclusions, ["Bob", "Charlie"]);
        assert!(manifest.participants[2].exclusions.is_empty());
    }

    #[test]
    fn exclusions_default_to_empty() {
        let manifest =
            Manifest::from_json(r#"{"participants": [{"name": "Charlie"}]}"#).unwrap();
        assert!(manifest.participants[0].exclusions.is_empty());
    }

    #[test]
    fn missing_participants_key_rejected() {
        let err = Manifest::from_json(r#"{"people": []}"#).unwrap_err();
        assert!(matches!(err, GiftmatchError::MalformedManifest { .. }), "{err}");
    }

    #[test]
    fn missing_name_rejected() {
        let err =
            Manifest::from_json(r#"{"participants": [{"exclusions": ["Bob"]}]}"#).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("name"), "descriptive reason: {msg}");
    }

    #[test]
    fn invalid_json_rejected() {
        let err = Manifest::from_json("not json at all").unwrap_err();
        assert!(matches!(err, GiftmatchError::MalformedManifest { .. }));
    }

    #[test]
    fn blank_name_rejected() {
        let err = Manifest::from_json(r#"{"participants": [{"name": "  "}]}"#).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("empty name"), "{msg}");
    }

    #[test]
    fn empty_participant_list_is_valid_shape() {
        // Shape-valid; the "too few participants" check belongs to sealing.
        let manifest = Manifest::from_json(r#"{"participants": []}"#).unwrap();
        assert!(manifest.is_empty());
    }
}
