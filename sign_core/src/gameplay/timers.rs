use log::debug;

use super::countdown::{Countdown, CountdownEvent};
use super::hold::{HoldEvent, HoldTimer};
use super::state::{Phase, TimerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    HoldStarted,
    HoldInterrupted,
    CountdownTick { remaining: i64 },
    Succeeded,
    Failed,
}

/// The hold timer and the optional countdown racing for one round.
///
/// Whichever machine reaches its terminal state first wins; the other is
/// stopped in the same call, so at most one of `Succeeded`/`Failed` is ever
/// reported and only once.
#[derive(Debug, Clone)]
pub struct RoundTimers {
    hold: HoldTimer,
    countdown: Option<Countdown>,
    outcome: Option<Phase>,
}

impl RoundTimers {
    /// `time_budget_secs == 0` disables the countdown.
    pub fn new(hold_secs: f64, time_budget_secs: u32) -> Self {
        Self {
            hold: HoldTimer::new(hold_secs),
            countdown: (time_budget_secs > 0).then(|| Countdown::new(time_budget_secs)),
            outcome: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_timed(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn phase(&self) -> Phase {
        self.outcome.unwrap_or_else(|| self.hold.phase())
    }

    pub fn state(&self) -> TimerState {
        TimerState {
            phase: self.phase(),
            elapsed_hold_secs: self.hold.elapsed_secs(),
            countdown_remaining_secs: self.countdown.as_ref().map(Countdown::remaining_secs),
            hold_percent: self.hold.percent(),
        }
    }

    pub fn countdown_percent(&self) -> Option<f64> {
        self.countdown.as_ref().map(Countdown::percent_remaining)
    }

    /// Feed one match decision into the hold timer.
    pub fn on_match(&mut self, is_match: bool, dt: f64) -> Option<RoundEvent> {
        if self.is_terminal() {
            return None;
        }
        match self.hold.tick(is_match, dt)? {
            HoldEvent::Started => Some(RoundEvent::HoldStarted),
            HoldEvent::Interrupted => Some(RoundEvent::HoldInterrupted),
            HoldEvent::Succeeded => {
                if let Some(countdown) = self.countdown.as_mut() {
                    countdown.cancel();
                }
                self.outcome = Some(Phase::Succeeded);
                debug!("round succeeded after {:.3}s hold", self.hold.elapsed_secs());
                Some(RoundEvent::Succeeded)
            }
        }
    }

    /// Advance the countdown by one second.
    pub fn on_countdown(&mut self) -> Option<RoundEvent> {
        if self.is_terminal() {
            return None;
        }
        match self.countdown.as_mut()?.tick() {
            CountdownEvent::Tick { remaining } => Some(RoundEvent::CountdownTick { remaining }),
            CountdownEvent::Expired => {
                self.hold.halt();
                self.outcome = Some(Phase::Failed);
                debug!("round failed: countdown expired");
                Some(RoundEvent::Failed)
            }
            CountdownEvent::Halted => None,
        }
    }

    pub fn reset(&mut self) {
        self.hold.reset();
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.reset();
        }
        self.outcome = None;
    }
}
