use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, Vowel};

pub const DEFAULT_VOLUME: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    FirstEasy,
    FirstIntermediate,
    FirstHard,
    Completionist,
}

impl Achievement {
    pub fn first_completion(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Achievement::FirstEasy,
            Difficulty::Intermediate => Achievement::FirstIntermediate,
            Difficulty::Hard => Achievement::FirstHard,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstEasy => "First Time Completion: Easy Vowels Challenge!",
            Achievement::FirstIntermediate => "First Time Completion: Intermediate Vowels Challenge!",
            Achievement::FirstHard => "First Time Completion: Hard Vowels Challenge!",
            Achievement::Completionist => "COMPLETIONIST ACHIEVEMENT UNLOCKED!",
        }
    }
}

/// The persisted account record. Every save replaces it whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountProgress {
    pub username: String,
    pub a_status: bool,
    pub e_status: bool,
    pub i_status: bool,
    pub o_status: bool,
    pub u_status: bool,
    pub intro_status: bool,
    pub easy_challenge: bool,
    pub intermediate_challenge: bool,
    pub hard_challenge: bool,
    pub achievements: BTreeSet<Achievement>,
    pub music_volume: f32,
    pub sfx_volume: f32,
}

impl Default for AccountProgress {
    fn default() -> Self {
        Self {
            username: String::new(),
            a_status: false,
            e_status: false,
            i_status: false,
            o_status: false,
            u_status: false,
            intro_status: false,
            easy_challenge: false,
            intermediate_challenge: false,
            hard_challenge: false,
            achievements: BTreeSet::new(),
            music_volume: DEFAULT_VOLUME,
            sfx_volume: DEFAULT_VOLUME,
        }
    }
}

impl AccountProgress {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn letter_done(&self, vowel: Vowel) -> bool {
        match vowel {
            Vowel::A => self.a_status,
            Vowel::E => self.e_status,
            Vowel::I => self.i_status,
            Vowel::O => self.o_status,
            Vowel::U => self.u_status,
        }
    }

    pub fn set_letter_done(&mut self, vowel: Vowel, done: bool) {
        let flag = match vowel {
            Vowel::A => &mut self.a_status,
            Vowel::E => &mut self.e_status,
            Vowel::I => &mut self.i_status,
            Vowel::O => &mut self.o_status,
            Vowel::U => &mut self.u_status,
        };
        *flag = done;
    }

    pub fn challenge_done(&self, difficulty: Difficulty) -> bool {
        match difficulty {
            Difficulty::Easy => self.easy_challenge,
            Difficulty::Intermediate => self.intermediate_challenge,
            Difficulty::Hard => self.hard_challenge,
        }
    }

    pub fn set_challenge_done(&mut self, difficulty: Difficulty, done: bool) {
        let flag = match difficulty {
            Difficulty::Easy => &mut self.easy_challenge,
            Difficulty::Intermediate => &mut self.intermediate_challenge,
            Difficulty::Hard => &mut self.hard_challenge,
        };
        *flag = done;
    }

    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Returns true if the achievement was newly added.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        self.achievements.insert(achievement)
    }

    /// Every tracked flag: all letters, the intro and the three challenge tiers.
    pub fn everything_done(&self) -> bool {
        Vowel::ALL.iter().all(|v| self.letter_done(*v))
            && self.intro_status
            && Difficulty::ALL.iter().all(|d| self.challenge_done(*d))
    }
}
