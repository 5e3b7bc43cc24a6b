//! Configuration types for the draw engine and the record store.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tuning knobs for the randomized draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Maximum shuffle-and-scan rounds before giving up.
    pub max_attempts: u32,
    /// Minimum roster size required to draw.
    pub min_participants: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            max_attempts: constants::MAX_DRAW_ATTEMPTS,
            min_participants: constants::MIN_PARTICIPANTS,
        }
    }
}

/// Configuration for the on-disk record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory under which per-event record directories are created.
    pub data_dir: String,
}

impl StoreConfig {
    #[must_use]
    pub fn new(data_dir: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
