//! JSON-on-disk record store.
//!
//! Layout under `StoreConfig::data_dir`, one directory per event (the
//! hyphen-free event UUID, so participant names never touch the
//! filesystem namespace):
//!
//! ```text
//! <data_dir>/
//!   <event uuid>/
//!     records.json    map: giver name → {giver, receiver, credential}
//!     master.json     aggregate organizer record
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use giftmatch_types::{
    EventId, GiftmatchError, MasterRecord, PairingExport, PairingRecord, Result, StoreConfig,
    constants,
};

use crate::record_store::RecordStore;

/// Record store backed by per-event JSON files.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            data_dir: PathBuf::from(&config.data_dir),
        }
    }

    fn event_dir(&self, event_id: EventId) -> PathBuf {
        self.data_dir.join(event_id.simple())
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl RecordStore for FileStore {
    fn save_export(&mut self, event_id: EventId, export: &PairingExport) -> Result<()> {
        let dir = self.event_dir(event_id);
        fs::create_dir_all(&dir)?;

        let records: BTreeMap<&str, &PairingRecord> = export
            .records
            .iter()
            .map(|r| (r.giver.as_str(), r))
            .collect();
        fs::write(
            dir.join(constants::RECORDS_FILE_NAME),
            serde_json::to_vec_pretty(&records)?,
        )?;
        fs::write(
            dir.join(constants::MASTER_FILE_NAME),
            serde_json::to_vec_pretty(&export.master)?,
        )?;

        tracing::info!(
            event = %event_id,
            records = export.records.len(),
            dir = %dir.display(),
            "Export persisted"
        );
        Ok(())
    }

    fn record(&self, event_id: EventId, giver: &str) -> Result<PairingRecord> {
        let path = self.event_dir(event_id).join(constants::RECORDS_FILE_NAME);
        let records: Option<BTreeMap<String, PairingRecord>> = Self::read_json(&path)?;
        records
            .and_then(|mut map| map.remove(giver))
            .ok_or_else(|| GiftmatchError::AssignmentNotFound {
                giver: giver.to_string(),
            })
    }

    fn master(&self, event_id: EventId) -> Result<MasterRecord> {
        let path = self.event_dir(event_id).join(constants::MASTER_FILE_NAME);
        Self::read_json(&path)?.ok_or(GiftmatchError::EventNotFound(event_id))
    }
}
