#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Detecting,
    HoldAccumulating,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Succeeded | Phase::Failed)
    }
}

/// Snapshot of both round machines, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerState {
    pub phase: Phase,
    pub elapsed_hold_secs: f64,
    /// `None` for untimed rounds.
    pub countdown_remaining_secs: Option<i64>,
    pub hold_percent: f64,
}
