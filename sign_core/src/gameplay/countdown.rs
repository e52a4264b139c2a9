#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One second elapsed; `remaining` is the new value.
    Tick { remaining: i64 },
    Expired,
    /// Already expired or cancelled.
    Halted,
}

/// Per-round time budget, decremented once per second on its own cadence.
#[derive(Debug, Clone)]
pub struct Countdown {
    budget_secs: u32,
    remaining_secs: i64,
    expired: bool,
    cancelled: bool,
}

impl Countdown {
    pub fn new(budget_secs: u32) -> Self {
        Self {
            budget_secs,
            remaining_secs: budget_secs as i64,
            expired: false,
            cancelled: false,
        }
    }

    pub fn budget_secs(&self) -> u32 {
        self.budget_secs
    }

    pub fn remaining_secs(&self) -> i64 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn is_halted(&self) -> bool {
        self.expired || self.cancelled
    }

    pub fn percent_remaining(&self) -> f64 {
        if self.budget_secs == 0 {
            return 0.0;
        }
        (self.remaining_secs.max(0) as f64 / self.budget_secs as f64) * 100.0
    }

    /// Decrement by one second; expires exactly once when reaching 0.
    pub fn tick(&mut self) -> CountdownEvent {
        if self.is_halted() {
            return CountdownEvent::Halted;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs <= 0 {
            self.remaining_secs = 0;
            self.expired = true;
            return CountdownEvent::Expired;
        }
        CountdownEvent::Tick {
            remaining: self.remaining_secs,
        }
    }

    /// Stop without failing; used when the gesture wins the race.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.budget_secs);
    }
}
