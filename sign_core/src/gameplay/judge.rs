use sign_schema::Vowel;

use crate::classifier::Classification;

/// Minimum classifier confidence for a frame to count as the target gesture.
pub const MATCH_THRESHOLD: f32 = 0.7;

/// True iff the classified gesture is the target at sufficient confidence.
pub fn is_match(result: &Classification, target_index: usize, threshold: f32) -> bool {
    result.class_index == target_index && result.confidence >= threshold
}

/// Per-frame decision, also driving the status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NoHand,
    PredictionError,
    Incorrect,
    Correct,
}

impl Verdict {
    pub fn is_match(self) -> bool {
        matches!(self, Verdict::Correct)
    }

    pub fn status_text(self) -> &'static str {
        match self {
            Verdict::NoHand => "No hand detected",
            Verdict::PredictionError => "Prediction error",
            Verdict::Incorrect => "Gesture incorrect",
            Verdict::Correct => "Correct gesture detected!",
        }
    }
}

/// What the pipeline produced for one frame, before judging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameObservation {
    NoHand,
    ClassifierFailed,
    Classified(Classification),
}

#[derive(Debug, Clone)]
pub struct GestureJudge {
    pub target: Vowel,
    pub threshold: f32,
}

impl GestureJudge {
    pub fn new(target: Vowel) -> Self {
        Self {
            target,
            threshold: MATCH_THRESHOLD,
        }
    }

    pub fn judge(&self, observation: FrameObservation) -> Verdict {
        match observation {
            FrameObservation::NoHand => Verdict::NoHand,
            FrameObservation::ClassifierFailed => Verdict::PredictionError,
            FrameObservation::Classified(result) => {
                if is_match(&result, self.target.index(), self.threshold) {
                    Verdict::Correct
                } else {
                    Verdict::Incorrect
                }
            }
        }
    }
}

/// Typed-answer check for easy rounds: trimmed, case-insensitive, one letter.
pub fn check_typed_answer(target: Vowel, answer: &str) -> bool {
    let mut chars = answer.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Vowel::from_char(c) == Some(target),
        _ => false,
    }
}

/// Input-field filter: keeps at most one leading alphabetic character.
pub fn sanitize_vowel_input(text: &str) -> String {
    match text.chars().next() {
        Some(c) if c.is_alphabetic() => c.to_string(),
        _ => String::new(),
    }
}
