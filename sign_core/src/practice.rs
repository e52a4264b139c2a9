use log::{info, warn};
use sign_schema::{AccountProgress, Achievement, Notification, Vowel};

use crate::audio::AudioCue;
use crate::challenge::award_completionist;
use crate::context::{AppContext, Destination};
use crate::error::StoreError;
use crate::gameplay::{RecognitionConfig, RecognitionSession, SessionEvent};
use crate::store::SharedStore;

pub const VOWELS_MENU_SCREEN: &str = "vowels_menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeOutcome {
    /// None for the intro lesson.
    pub vowel: Option<Vowel>,
    pub first_completion: bool,
    pub completionist_unlocked: bool,
}

/// Practice rounds are untimed with the default hold.
pub fn practice_config(vowel: Vowel) -> RecognitionConfig {
    RecognitionConfig::new(vowel)
}

pub fn complete_letter(store: &SharedStore, vowel: Vowel) -> Result<PracticeOutcome, StoreError> {
    let (outcome, _) = store.update(|record| {
        let first_completion = !record.letter_done(vowel);
        record.set_letter_done(vowel, true);
        finish(record, Some(vowel), first_completion)
    })?;
    info!("letter {} practiced (first={})", vowel.letter(), outcome.first_completion);
    Ok(outcome)
}

pub fn complete_intro(store: &SharedStore) -> Result<PracticeOutcome, StoreError> {
    let (outcome, _) = store.update(|record| {
        let first_completion = !record.intro_status;
        record.intro_status = true;
        finish(record, None, first_completion)
    })?;
    info!("intro finished (first={})", outcome.first_completion);
    Ok(outcome)
}

fn finish(record: &mut AccountProgress, vowel: Option<Vowel>, first_completion: bool) -> PracticeOutcome {
    PracticeOutcome {
        vowel,
        first_completion,
        completionist_unlocked: award_completionist(record),
    }
}

/// One letter's practice screen: hold the sign, get the letter credited.
pub struct LetterPractice {
    vowel: Vowel,
    session: RecognitionSession,
    ctx: AppContext,
    outcome: Option<PracticeOutcome>,
}

impl LetterPractice {
    pub fn new(vowel: Vowel, mut session: RecognitionSession, ctx: AppContext) -> Self {
        let config = practice_config(vowel)
            .hold_drive(session.config().hold_drive)
            .frame_rate_hz(session.config().frame_rate_hz)
            .camera_index(session.config().camera_index);
        session.reconfigure(config);
        Self {
            vowel,
            session,
            ctx,
            outcome: None,
        }
    }

    pub fn vowel(&self) -> Vowel {
        self.vowel
    }

    pub fn outcome(&self) -> Option<PracticeOutcome> {
        self.outcome
    }

    pub fn session(&self) -> &RecognitionSession {
        &self.session
    }

    pub fn enter(&mut self, now: f64) {
        self.outcome = None;
        self.session.enter(now);
    }

    pub fn leave(&mut self) {
        self.session.leave();
    }

    pub fn pump(&mut self, now: f64) -> Result<Vec<SessionEvent>, StoreError> {
        let events = self.session.pump(now);
        if events.contains(&SessionEvent::Succeeded) {
            self.session.leave();
            self.ctx.cue(AudioCue::Correct);
            let outcome = complete_letter(self.ctx.store(), self.vowel).map_err(|e| {
                warn!("could not record letter {}: {e}", self.vowel.letter());
                e
            })?;
            if outcome.completionist_unlocked {
                self.ctx.cue(AudioCue::Completionist);
                self.ctx.navigate(Destination::Notify(Notification::AchievementUnlocked(
                    Achievement::Completionist,
                )));
            }
            self.ctx
                .navigate(Destination::Screen(VOWELS_MENU_SCREEN.to_string()));
            self.outcome = Some(outcome);
        }
        Ok(events)
    }
}
