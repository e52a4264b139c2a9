pub mod catalog;
pub mod completion;
pub mod menu;
pub mod runner;
pub mod sequencer;

pub use catalog::{rounds, CHALLENGE_MENU_SCREEN};
pub use completion::{award_completionist, complete_challenge};
pub use menu::{availability, tier_status, TierStatus};
pub use runner::{ChallengeRunner, RunnerState};
pub use sequencer::{ChallengeSequencer, SequencerStep};
