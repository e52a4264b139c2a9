use std::sync::Arc;

use parking_lot::Mutex;
use sign_schema::Notification;

use crate::audio::{AudioCue, CueHandle};
use crate::error::StoreError;
use crate::settings::Volumes;
use crate::store::SharedStore;

/// Where the core asks the external screen router to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Named screen, e.g. the next round's `success_screen`.
    Screen(String),
    ChallengeMenu,
    /// Show a dialog; the router calls back when it is dismissed.
    Notify(Notification),
}

pub trait Navigator {
    fn navigate(&mut self, destination: Destination);
}

/// Keeps every navigation request; clones share the log.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    log: Arc<Mutex<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Destination> {
        self.log.lock().clone()
    }

    pub fn take(&self) -> Vec<Destination> {
        std::mem::take(&mut *self.log.lock())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, destination: Destination) {
        self.log.lock().push(destination);
    }
}

/// Everything a round or challenge needs from the surrounding app, handed
/// over at construction.
pub struct AppContext {
    navigator: Box<dyn Navigator>,
    cues: Option<CueHandle>,
    volumes: Volumes,
    store: SharedStore,
}

impl AppContext {
    /// Loads (or creates) the account record to seed the volumes.
    pub fn new(navigator: Box<dyn Navigator>, store: SharedStore) -> Result<Self, StoreError> {
        let record = store.load_or_init()?;
        Ok(Self {
            navigator,
            cues: None,
            volumes: Volumes::from_record(&record),
            store,
        })
    }

    pub fn with_cues(mut self, cues: CueHandle) -> Self {
        self.cues = Some(cues);
        self
    }

    pub fn navigate(&mut self, destination: Destination) {
        self.navigator.navigate(destination);
    }

    /// No-op when no player is attached.
    pub fn cue(&self, cue: AudioCue) {
        if let Some(cues) = &self.cues {
            cues.play(cue, self.volumes.sfx());
        }
    }

    pub fn volumes(&self) -> &Volumes {
        &self.volumes
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}
