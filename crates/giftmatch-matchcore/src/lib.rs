//! # giftmatch-matchcore
//!
//! Pure draw engine: constrained randomized matching over sealed rosters.
//!
//! The core function MatchCore exposes — no side effects, no file writes,
//! no registration state:
//!
//! ```text
//! draw_assignment(SealedRoster) -> Assignment
//! ```
//!
//! plus the pure export transformation that turns an assignment into
//! persistable records:
//!
//! ```text
//! export_pairings(SealedRoster, Assignment) -> PairingExport
//! ```
//!
//! The draw is a bounded randomized heuristic (shuffle, greedy first-fit,
//! full restart on dead-end): fast for the sparse exclusion graphs of real
//! events, but deliberately not a complete bipartite-matching solver.

pub mod digest;
pub mod draw;
pub mod export;

pub use digest::{compute_assignment_digest, verify_assignment_digest};
pub use draw::{draw_assignment, draw_assignment_with_rng};
pub use export::export_pairings;
