//! # giftmatch-types
//!
//! Shared types, errors, and configuration for the **GiftMatch** exchange
//! matcher.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`EventId`]
//! - **Participant model**: [`Participant`], [`Credential`], [`validate_exclusions`]
//! - **Roster model**: [`SealedRoster`]
//! - **Assignment model**: [`Assignment`]
//! - **Record model**: [`PairingRecord`], [`MasterRecord`], [`PairingExport`]
//! - **Ingestion schema**: [`Manifest`], [`ManifestEntry`]
//! - **Configuration**: [`DrawConfig`], [`StoreConfig`]
//! - **Errors**: [`GiftmatchError`] with `GM_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod assignment;
pub mod config;
pub mod constants;
pub mod credential;
pub mod error;
pub mod ids;
pub mod manifest;
pub mod participant;
pub mod record;
pub mod roster;

// Re-export all primary types at crate root for ergonomic imports:
//   use giftmatch_types::{Participant, Assignment, PairingRecord, ...};

pub use assignment::*;
pub use config::*;
pub use credential::*;
pub use error::*;
pub use ids::*;
pub use manifest::*;
pub use participant::*;
pub use record::*;
pub use roster::*;

// Constants are accessed via `giftmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
