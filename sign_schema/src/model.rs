use serde::{Deserialize, Serialize};

/// Number of gesture classes the classifier distinguishes.
pub const VOWEL_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
}

impl Vowel {
    pub const ALL: [Vowel; VOWEL_COUNT] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    /// Class index used by the gesture model (0:A, 1:E, 2:I, 3:O, 4:U).
    pub fn index(self) -> usize {
        match self {
            Vowel::A => 0,
            Vowel::E => 1,
            Vowel::I => 2,
            Vowel::O => 3,
            Vowel::U => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(self) -> char {
        match self {
            Vowel::A => 'A',
            Vowel::E => 'E',
            Vowel::I => 'I',
            Vowel::O => 'O',
            Vowel::U => 'U',
        }
    }

    /// Case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Vowel::A),
            'E' => Some(Vowel::E),
            'I' => Some(Vowel::I),
            'O' => Some(Vowel::O),
            'U' => Some(Vowel::U),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Intermediate,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Hard];

    /// Seconds allowed per round; 0 means the round is untimed.
    pub fn time_budget_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Intermediate => 5,
            Difficulty::Hard => 3,
        }
    }

    /// Easy rounds are answered by typing the letter instead of signing it.
    pub fn is_typed(self) -> bool {
        matches!(self, Difficulty::Easy)
    }

    /// Tier that must be completed before this one unlocks.
    pub fn prerequisite(self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Intermediate => Some(Difficulty::Easy),
            Difficulty::Hard => Some(Difficulty::Intermediate),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }
}

/// How a round is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundKind {
    Typed,
    Gesture,
}

/// Static configuration for one letter of a challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeRound {
    pub target: Vowel,
    pub kind: RoundKind,
    pub prompt_asset: String,
    pub success_screen: String,
    /// 0 = untimed / hold-only, > 0 = countdown-fail variant.
    #[serde(default)]
    pub time_budget_secs: u32,
    /// Continuous-match time needed to confirm the gesture.
    #[serde(default = "default_hold_secs")]
    pub hold_secs: f64,
}

pub const DEFAULT_HOLD_SECS: f64 = 3.0;

fn default_hold_secs() -> f64 {
    DEFAULT_HOLD_SECS
}

impl ChallengeRound {
    pub fn is_timed(&self) -> bool {
        self.time_budget_secs > 0
    }
}
