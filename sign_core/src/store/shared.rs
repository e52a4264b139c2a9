use std::sync::Arc;

use parking_lot::Mutex;
use sign_schema::AccountProgress;

use super::ProgressStore;
use crate::error::StoreError;

/// Cloneable handle serializing whole read-modify-write cycles on one store.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<Box<dyn ProgressStore + Send>>>,
}

impl SharedStore {
    pub fn new(store: impl ProgressStore + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    pub fn load_or_init(&self) -> Result<AccountProgress, StoreError> {
        let guard = self.inner.lock();
        super::load_or_init(&**guard)
    }

    /// Load, mutate and save while holding the lock for the whole cycle.
    pub fn update<R>(&self, f: impl FnOnce(&mut AccountProgress) -> R) -> Result<(R, AccountProgress), StoreError> {
        let guard = self.inner.lock();
        super::update(&**guard, f)
    }
}

impl ProgressStore for SharedStore {
    fn load(&self) -> Result<AccountProgress, StoreError> {
        self.inner.lock().load()
    }

    fn save(&self, record: &AccountProgress) -> Result<(), StoreError> {
        self.inner.lock().save(record)
    }
}
