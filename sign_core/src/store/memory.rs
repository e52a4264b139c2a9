use parking_lot::Mutex;
use sign_schema::AccountProgress;

use super::ProgressStore;
use crate::error::StoreError;

/// In-process store. Holds a serialized copy so a load never aliases the
/// caller's record.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: &AccountProgress) -> Self {
        let store = Self::new();
        *store.data.lock() = serde_json::to_string(record).ok();
        store
    }

    /// Replace the stored bytes verbatim, e.g. to simulate corruption.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.data.lock() = Some(raw.into());
    }

    pub fn is_empty(&self) -> bool {
        self.data.lock().is_none()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<AccountProgress, StoreError> {
        let guard = self.data.lock();
        let raw = guard
            .as_deref()
            .ok_or_else(|| StoreError::NotFound("memory".to_string()))?;
        serde_json::from_str(raw).map_err(StoreError::Corrupt)
    }

    fn save(&self, record: &AccountProgress) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record).map_err(StoreError::Corrupt)?;
        *self.data.lock() = Some(raw);
        Ok(())
    }
}
