pub mod clock;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{DueTick, TaskId, TickScheduler};
