//! # giftmatch-ingress
//!
//! **Roster ingress**: participant registration, manifest loading,
//! exclusion validation, and roster sealing.
//!
//! ## Architecture
//!
//! Ingress sits between the caller (CLI, web layer, tests) and the draw
//! engine:
//! 1. **Roster**: collects participants during registration, issuing a
//!    fresh credential per entry
//! 2. **Manifest loading**: all-or-nothing bulk registration from the
//!    explicit JSON schema
//! 3. **Exclusion validation**: hard gate — every excluded name must be a
//!    registered participant
//! 4. **Sealing**: snapshots the roster into an immutable [`SealedRoster`]
//!    with a hash commitment
//!
//! ## Flow
//!
//! ```text
//! Manifest → Roster.load_manifest() → Roster.seal() → SealedRoster → draw engine
//! ```
//!
//! The draw engine only ever consumes a sealed roster; registration and
//! matching never interleave.
//!
//! [`SealedRoster`]: giftmatch_types::SealedRoster

pub mod roster;
pub mod sealer;

pub use roster::Roster;
pub use sealer::{compute_roster_hash, verify_roster_hash};
