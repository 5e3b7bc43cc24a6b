//! # giftmatch-store
//!
//! **Persistence plane**: credentialed record storage, export auditing,
//! and the per-event registry.
//!
//! ## Architecture
//!
//! The store sits downstream of the draw engine and owns everything after
//! an assignment exists:
//! 1. **RecordStore**: the storage collaborator contract — durable per-giver
//!    records keyed by giver name, namespaced per event, retrieved by
//!    `(name, credential)`
//! 2. **MemoryStore** / **FileStore**: in-memory and JSON-on-disk
//!    implementations
//! 3. **audit**: structural verification of an export before it is trusted
//!    (bijection, no fixed points, digest recomputation)
//! 4. **EventRegistry**: explicit ownership of one roster per event, with a
//!    defined disposal point once results are persisted
//!
//! ## Flow
//!
//! ```text
//! EventRegistry.create_event() → Roster registration
//!     → run_draw(): seal → draw → export → audit → RecordStore.save_export()
//!     → lookup(event, name, credential) → receiver
//! ```

pub mod audit;
pub mod file_store;
pub mod record_store;
pub mod registry;

pub use file_store::FileStore;
pub use record_store::{MemoryStore, RecordStore};
pub use registry::EventRegistry;
