pub mod countdown;
pub mod hold;
pub mod judge;
pub mod session;
pub mod state;
pub mod timers;

pub use countdown::{Countdown, CountdownEvent};
pub use hold::{HoldEvent, HoldTimer, DEFAULT_HOLD_SECS};
pub use judge::{check_typed_answer, is_match, sanitize_vowel_input, GestureJudge, Verdict, MATCH_THRESHOLD};
pub use session::{HoldDrive, RecognitionConfig, RecognitionSession, SessionEvent, FRAME_RATE_HZ, HOLD_SUBTICK_HZ};
pub use state::{Phase, TimerState};
pub use timers::{RoundEvent, RoundTimers};
