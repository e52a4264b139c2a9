use super::state::Phase;

pub use sign_schema::DEFAULT_HOLD_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldEvent {
    Started,
    Interrupted,
    Succeeded,
}

/// Continuous-hold confirmation: the target gesture must be matched without
/// interruption for `target_secs`. Any non-matching tick discards progress.
#[derive(Debug, Clone)]
pub struct HoldTimer {
    target_secs: f64,
    elapsed_secs: f64,
    phase: Phase,
}

impl HoldTimer {
    pub fn new(target_secs: f64) -> Self {
        Self {
            target_secs: target_secs.max(0.0),
            elapsed_secs: 0.0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn target_secs(&self) -> f64 {
        self.target_secs
    }

    /// Progress for the UI, clamped to 0..=100.
    pub fn percent(&self) -> f64 {
        match self.phase {
            Phase::Succeeded => 100.0,
            Phase::HoldAccumulating if self.target_secs == 0.0 => 100.0,
            _ if self.target_secs == 0.0 => 0.0,
            _ => (self.elapsed_secs / self.target_secs * 100.0).min(100.0),
        }
    }

    /// Advance by one tick. `dt` is the real time since the previous tick.
    /// Returns `Succeeded` exactly once; terminal phases ignore further ticks.
    pub fn tick(&mut self, is_match: bool, dt: f64) -> Option<HoldEvent> {
        if self.phase.is_terminal() {
            return None;
        }

        if !is_match {
            let was_holding = self.phase == Phase::HoldAccumulating;
            self.elapsed_secs = 0.0;
            self.phase = Phase::Detecting;
            return was_holding.then_some(HoldEvent::Interrupted);
        }

        let started = if self.phase == Phase::HoldAccumulating {
            self.elapsed_secs += dt.max(0.0);
            false
        } else {
            self.elapsed_secs = 0.0;
            self.phase = Phase::HoldAccumulating;
            true
        };

        if self.elapsed_secs >= self.target_secs {
            self.phase = Phase::Succeeded;
            return Some(HoldEvent::Succeeded);
        }

        started.then_some(HoldEvent::Started)
    }

    /// Stop without success (the round failed elsewhere).
    pub fn halt(&mut self) {
        if !self.phase.is_terminal() {
            self.phase = Phase::Failed;
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
        self.phase = Phase::Idle;
    }
}
