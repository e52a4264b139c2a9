pub mod file;
pub mod memory;
pub mod shared;

use log::{info, warn};
use sign_schema::AccountProgress;

use crate::error::StoreError;

pub use file::{JsonFileStore, DEFAULT_STORE_FILE};
pub use memory::MemoryStore;
pub use shared::SharedStore;

/// Single-record persistence. `save` replaces the whole record; there is no
/// merging, so callers load immediately before mutating.
pub trait ProgressStore {
    fn load(&self) -> Result<AccountProgress, StoreError>;
    fn save(&self, record: &AccountProgress) -> Result<(), StoreError>;
}

/// Load the record, creating a default one on first run or when the stored
/// record cannot be decoded. A corrupt record's progress is discarded.
pub fn load_or_init(store: &dyn ProgressStore) -> Result<AccountProgress, StoreError> {
    match store.load() {
        Ok(record) => Ok(record),
        Err(StoreError::NotFound(location)) => {
            info!("no progress record at {location}; creating default");
            let record = AccountProgress::default();
            store.save(&record)?;
            Ok(record)
        }
        Err(StoreError::Corrupt(e)) => {
            warn!("progress record is corrupt ({e}); previous progress is lost, recreating default");
            let record = AccountProgress::default();
            store.save(&record)?;
            Ok(record)
        }
        Err(e) => Err(e),
    }
}

/// Load, apply `f`, save the whole record, and return what `f` returned.
pub fn update<R>(
    store: &dyn ProgressStore,
    f: impl FnOnce(&mut AccountProgress) -> R,
) -> Result<(R, AccountProgress), StoreError> {
    let mut record = load_or_init(store)?;
    let out = f(&mut record);
    store.save(&record)?;
    Ok((out, record))
}

/// Create a fresh account for `username`, replacing any existing record.
pub fn register(store: &dyn ProgressStore, username: &str) -> Result<AccountProgress, StoreError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(StoreError::EmptyUsername);
    }
    let record = AccountProgress::new(username);
    store.save(&record)?;
    info!("registered account {username}");
    Ok(record)
}
