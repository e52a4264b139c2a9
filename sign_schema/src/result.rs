use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Vowel};
use crate::profile::Achievement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Succeeded,
    /// Countdown expired before the gesture was confirmed.
    TimedOut,
    /// Typed answer did not match the target letter.
    WrongAnswer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_index: usize,
    pub target: Vowel,
    pub outcome: RoundOutcome,
}

/// Messages surfaced to the player after a challenge, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    ChallengeComplete(Difficulty),
    AchievementUnlocked(Achievement),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub difficulty: Difficulty,
    pub first_completion: bool,
    pub completionist_unlocked: bool,
    pub notifications: Vec<Notification>,
}
