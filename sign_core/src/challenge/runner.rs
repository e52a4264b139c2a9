use log::warn;
use sign_schema::{Achievement, CompletionReport, Notification, RoundKind, RoundOutcome};

use super::catalog;
use super::completion::complete_challenge;
use super::sequencer::{ChallengeSequencer, SequencerStep};
use crate::audio::AudioCue;
use crate::context::{AppContext, Destination};
use crate::error::StoreError;
use crate::gameplay::{RecognitionConfig, RecognitionSession, SessionEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerState {
    NotStarted,
    Running,
    Completed(CompletionReport),
    Aborted(RoundOutcome),
    /// Left early, had no round to play, or the completion could not be saved.
    Abandoned,
}

impl RunnerState {
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RunnerState::Completed(_) | RunnerState::Aborted(_) | RunnerState::Abandoned
        )
    }
}

/// Plays one challenge: routes typed answers and recognition results into the
/// sequencer, then navigates, plays cues and credits progress.
pub struct ChallengeRunner {
    sequencer: ChallengeSequencer,
    session: RecognitionSession,
    ctx: AppContext,
    state: RunnerState,
}

impl ChallengeRunner {
    pub fn new(sequencer: ChallengeSequencer, session: RecognitionSession, ctx: AppContext) -> Self {
        Self {
            sequencer,
            session,
            ctx,
            state: RunnerState::NotStarted,
        }
    }

    pub fn state(&self) -> &RunnerState {
        &self.state
    }

    pub fn sequencer(&self) -> &ChallengeSequencer {
        &self.sequencer
    }

    pub fn session(&self) -> &RecognitionSession {
        &self.session
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Show the first round. A sequencer with no round left goes straight
    /// back to the menu.
    pub fn start(&mut self, now: f64) {
        if self.state != RunnerState::NotStarted {
            return;
        }
        if self.sequencer.current().is_none() {
            warn!(
                "{:?} challenge has no round to play",
                self.sequencer.difficulty()
            );
            self.state = RunnerState::Abandoned;
            self.ctx.navigate(Destination::ChallengeMenu);
            return;
        }
        self.state = RunnerState::Running;
        let difficulty = self.sequencer.difficulty();
        self.ctx
            .navigate(Destination::Screen(catalog::round_screen(difficulty, 0)));
        self.begin_round(now);
    }

    /// Typed answer for the current round. Ignored unless a typed round is up.
    pub fn submit_answer(&mut self, answer: &str, now: f64) -> Result<Option<SequencerStep>, StoreError> {
        if self.state != RunnerState::Running {
            return Ok(None);
        }
        self.ctx.cue(AudioCue::ButtonClick);
        let Some(step) = self.sequencer.submit_answer(answer) else {
            return Ok(None);
        };
        let cue = if matches!(step, SequencerStep::Aborted(_)) {
            AudioCue::Wrong
        } else {
            AudioCue::Correct
        };
        self.ctx.cue(cue);
        self.apply(step, now)?;
        Ok(Some(step))
    }

    /// Run the recognition ticks due by `now` and act on their outcome.
    pub fn pump(&mut self, now: f64) -> Result<Vec<SessionEvent>, StoreError> {
        if self.state != RunnerState::Running {
            return Ok(Vec::new());
        }
        let events = self.session.pump(now);
        for event in &events {
            let step = match event {
                SessionEvent::CountdownTick { remaining, .. } if *remaining > 0 => {
                    self.ctx.cue(AudioCue::CountdownTick);
                    None
                }
                SessionEvent::Succeeded => {
                    self.ctx.cue(AudioCue::Correct);
                    self.sequencer.round_succeeded()
                }
                SessionEvent::Failed => {
                    self.ctx.cue(AudioCue::Wrong);
                    self.sequencer.round_failed(RoundOutcome::TimedOut)
                }
                _ => None,
            };
            if let Some(step) = step {
                self.apply(step, now)?;
            }
        }
        Ok(events)
    }

    /// Back button: abandon the challenge without credit.
    pub fn leave(&mut self) {
        self.session.leave();
        if self.state == RunnerState::Running {
            self.state = RunnerState::Abandoned;
            self.ctx.navigate(Destination::ChallengeMenu);
        }
    }

    fn begin_round(&mut self, now: f64) {
        let Some(round) = self.sequencer.current() else {
            return;
        };
        if round.kind == RoundKind::Gesture {
            let config = RecognitionConfig::for_round(round)
                .hold_drive(self.session.config().hold_drive)
                .frame_rate_hz(self.session.config().frame_rate_hz)
                .camera_index(self.session.config().camera_index);
            self.session.reconfigure(config);
            self.session.enter(now);
        } else {
            self.session.leave();
        }
    }

    fn apply(&mut self, step: SequencerStep, now: f64) -> Result<(), StoreError> {
        match step {
            SequencerStep::Advance { index } => {
                let screen = self.sequencer.rounds()[index - 1].success_screen.clone();
                self.ctx.navigate(Destination::Screen(screen));
                self.begin_round(now);
            }
            SequencerStep::Completed => {
                self.session.leave();
                let report = match complete_challenge(self.ctx.store(), self.sequencer.difficulty()) {
                    Ok(report) => report,
                    Err(e) => {
                        warn!("could not record challenge completion: {e}");
                        self.state = RunnerState::Abandoned;
                        self.ctx.navigate(Destination::ChallengeMenu);
                        return Err(e);
                    }
                };
                for notification in &report.notifications {
                    self.ctx.cue(cue_for(notification));
                    self.ctx.navigate(Destination::Notify(*notification));
                }
                self.ctx.navigate(Destination::ChallengeMenu);
                self.state = RunnerState::Completed(report);
            }
            SequencerStep::Aborted(outcome) => {
                self.session.leave();
                self.ctx.navigate(Destination::ChallengeMenu);
                self.state = RunnerState::Aborted(outcome);
            }
        }
        Ok(())
    }
}

fn cue_for(notification: &Notification) -> AudioCue {
    match notification {
        Notification::ChallengeComplete(_) => AudioCue::Completion,
        Notification::AchievementUnlocked(Achievement::Completionist) => AudioCue::Completionist,
        Notification::AchievementUnlocked(_) => AudioCue::Achievement,
    }
}
