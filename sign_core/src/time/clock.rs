use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use atomic_float::AtomicF64;

/// Monotonic seconds since an arbitrary origin.
pub trait Clock {
    fn now(&self) -> f64;
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Externally driven clock. Clones share the same time source.
#[derive(Clone)]
pub struct ManualClock {
    time: Arc<AtomicF64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            time: Arc::new(AtomicF64::new(start)),
        }
    }

    pub fn set(&self, t: f64) {
        self.time.store(t, Ordering::Release);
    }

    pub fn advance(&self, dt: f64) -> f64 {
        self.time.fetch_add(dt, Ordering::AcqRel) + dt
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.time.load(Ordering::Acquire)
    }
}
