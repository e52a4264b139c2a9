#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueTick<T> {
    pub id: TaskId,
    pub task: T,
    /// Scheduled time of this tick.
    pub at: f64,
    /// Real time since the task last fired (or was scheduled), measured at the
    /// pump that dispatched it.
    pub dt: f64,
}

const MIN_PERIOD: f64 = 1e-3;
/// Slack for due checks, so ticks on the same grid as the caller's clock are
/// not pushed to the next pump by rounding.
const DUE_EPSILON: f64 = 1e-9;

struct Periodic<T> {
    id: TaskId,
    task: T,
    period: f64,
    next_due: f64,
    last_fired: f64,
}

/// Cooperative periodic-callback scheduler.
///
/// Nothing runs on its own: the owner repeatedly asks for the single earliest
/// due tick and dispatches it. Because ticks are handed out one at a time, a
/// cancellation made while handling one tick suppresses every later tick of
/// the cancelled task, even if it was already due.
///
/// A late caller does not get a burst of catch-up ticks: a task fires at most
/// once per `now`, its `dt` is the real time since it last fired, and the
/// missed intervals are skipped.
pub struct TickScheduler<T> {
    tasks: Vec<Periodic<T>>,
    next_id: u64,
}

impl<T: Copy> TickScheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// First tick fires one `period` after `now`.
    pub fn schedule_interval(&mut self, task: T, period: f64, now: f64) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let period = period.max(MIN_PERIOD);
        self.tasks.push(Periodic {
            id,
            task,
            period,
            next_due: now + period,
            last_fired: now,
        });
        id
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Earliest tick due at or before `now`. Ties go to the task scheduled first.
    pub fn next_due(&mut self, now: f64) -> Option<DueTick<T>> {
        let slot = self
            .tasks
            .iter_mut()
            .filter(|t| t.next_due <= now + DUE_EPSILON)
            .min_by(|a, b| a.next_due.total_cmp(&b.next_due).then(a.id.cmp(&b.id)))?;

        let at = slot.next_due;
        let tick = DueTick {
            id: slot.id,
            task: slot.task,
            at,
            dt: (now - slot.last_fired).max(0.0),
        };
        let missed = ((now - at) / slot.period).floor().max(0.0);
        slot.next_due = at + slot.period * (missed + 1.0);
        if slot.next_due <= now + DUE_EPSILON {
            slot.next_due += slot.period;
        }
        slot.last_fired = now;
        Some(tick)
    }
}

impl<T: Copy> Default for TickScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
