use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use sign_schema::AccountProgress;

use super::ProgressStore;
use crate::error::StoreError;

pub const DEFAULT_STORE_FILE: &str = "account_data.json";

/// JSON file holding the one account record.
///
/// Writes go to a sibling temp file which is then renamed over the target, so
/// a reader sees either the old record or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<AccountProgress, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.display().to_string()))
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };
        serde_json::from_slice(&bytes).map_err(StoreError::Corrupt)
    }

    fn save(&self, record: &AccountProgress) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(record)
            .map_err(|e| self.io_error(&self.path, std::io::Error::new(ErrorKind::InvalidData, e)))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(dir, e))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(&self.path, e))
    }
}
