use std::sync::atomic::Ordering;
use std::sync::Arc;

use atomic_float::AtomicF32;
use sign_schema::{AccountProgress, DEFAULT_VOLUME};

use crate::error::StoreError;
use crate::store::SharedStore;

/// Music and sound-effect volumes, readable from an audio thread.
#[derive(Clone)]
pub struct Volumes {
    music: Arc<AtomicF32>,
    sfx: Arc<AtomicF32>,
}

impl Default for Volumes {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME, DEFAULT_VOLUME)
    }
}

impl Volumes {
    pub fn new(music: f32, sfx: f32) -> Self {
        Self {
            music: Arc::new(AtomicF32::new(clamp_volume(music))),
            sfx: Arc::new(AtomicF32::new(clamp_volume(sfx))),
        }
    }

    pub fn from_record(record: &AccountProgress) -> Self {
        Self::new(record.music_volume, record.sfx_volume)
    }

    pub fn music(&self) -> f32 {
        self.music.load(Ordering::Acquire)
    }

    pub fn sfx(&self) -> f32 {
        self.sfx.load(Ordering::Acquire)
    }

    /// Applies immediately, then persists into the account record.
    pub fn set_music_volume(&self, store: &SharedStore, volume: f32) -> Result<(), StoreError> {
        let volume = clamp_volume(volume);
        self.music.store(volume, Ordering::Release);
        store.update(|record| record.music_volume = volume)?;
        Ok(())
    }

    pub fn set_sfx_volume(&self, store: &SharedStore, volume: f32) -> Result<(), StoreError> {
        let volume = clamp_volume(volume);
        self.sfx.store(volume, Ordering::Release);
        store.update(|record| record.sfx_volume = volume)?;
        Ok(())
    }
}

fn clamp_volume(v: f32) -> f32 {
    if v.is_nan() {
        DEFAULT_VOLUME
    } else {
        v.clamp(0.0, 1.0)
    }
}
