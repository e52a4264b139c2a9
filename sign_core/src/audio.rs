use crossbeam_channel::{unbounded, Receiver, Sender};

/// Named sound events for an external sound-effects player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    ButtonClick,
    Correct,
    Wrong,
    CountdownTick,
    Completion,
    Achievement,
    Completionist,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueCommand {
    Play { cue: AudioCue, volume: f32 },
}

/// Sending side, held by the game core. Sends never block and a missing or
/// disconnected player is ignored.
#[derive(Clone)]
pub struct CueHandle {
    command_tx: Sender<CueCommand>,
}

impl CueHandle {
    pub fn play(&self, cue: AudioCue, volume: f32) {
        let _ = self.command_tx.send(CueCommand::Play { cue, volume });
    }
}

/// Receiving side, owned by whatever actually plays sounds.
pub struct CueQueue {
    command_rx: Receiver<CueCommand>,
}

impl CueQueue {
    pub fn new() -> (Self, CueHandle) {
        let (tx, rx) = unbounded();
        (Self { command_rx: rx }, CueHandle { command_tx: tx })
    }

    /// Non-blocking. Returns None if nothing is pending.
    pub fn pop(&self) -> Option<CueCommand> {
        self.command_rx.try_recv().ok()
    }

    pub fn drain(&self) -> Vec<CueCommand> {
        self.command_rx.try_iter().collect()
    }
}
