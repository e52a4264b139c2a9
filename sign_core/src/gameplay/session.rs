use log::{debug, info, warn};
use sign_schema::{ChallengeRound, Vowel, DEFAULT_HOLD_SECS};

use super::judge::{FrameObservation, GestureJudge, Verdict};
use super::state::TimerState;
use super::timers::{RoundEvent, RoundTimers};
use crate::classifier::GestureClassifier;
use crate::time::TickScheduler;
use crate::vision::{Camera, CameraProvider, FeatureVector, Frame, LandmarkExtractor};

pub const FRAME_RATE_HZ: f64 = 30.0;
pub const HOLD_SUBTICK_HZ: f64 = 10.0;
pub const COUNTDOWN_PERIOD_SECS: f64 = 1.0;
pub const DEFAULT_CAMERA_INDEX: u32 = 0;

/// What advances the hold timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldDrive {
    /// Every video frame feeds its verdict and frame dt directly.
    FrameTick,
    /// A separate 10 Hz task advances the hold using the latest frame verdict.
    SubTick,
}

/// Parameters of one recognition screen; replaces one screen class per letter.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionConfig {
    pub target: Vowel,
    pub hold_secs: f64,
    pub time_budget_secs: u32,
    pub hold_drive: HoldDrive,
    pub frame_rate_hz: f64,
    pub camera_index: u32,
}

impl RecognitionConfig {
    pub fn new(target: Vowel) -> Self {
        Self {
            target,
            hold_secs: DEFAULT_HOLD_SECS,
            time_budget_secs: 0,
            hold_drive: HoldDrive::FrameTick,
            frame_rate_hz: FRAME_RATE_HZ,
            camera_index: DEFAULT_CAMERA_INDEX,
        }
    }

    pub fn for_round(round: &ChallengeRound) -> Self {
        Self::new(round.target)
            .hold_secs(round.hold_secs)
            .time_budget_secs(round.time_budget_secs)
    }

    pub fn hold_secs(mut self, secs: f64) -> Self {
        self.hold_secs = secs;
        self
    }

    pub fn time_budget_secs(mut self, secs: u32) -> Self {
        self.time_budget_secs = secs;
        self
    }

    pub fn hold_drive(mut self, drive: HoldDrive) -> Self {
        self.hold_drive = drive;
        self
    }

    pub fn frame_rate_hz(mut self, hz: f64) -> Self {
        self.frame_rate_hz = hz;
        self
    }

    pub fn camera_index(mut self, index: u32) -> Self {
        self.camera_index = index;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTask {
    Frame,
    HoldSubTick,
    Countdown,
}

/// Signals for the UI projection and the round orchestration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Status line changed.
    Status(Verdict),
    HoldProgress { percent: f64 },
    CountdownTick { remaining: i64, percent: f64 },
    Succeeded,
    Failed,
}

/// One live recognition screen: camera, pipeline, timers and their ticks.
pub struct RecognitionSession {
    config: RecognitionConfig,
    cameras: Box<dyn CameraProvider>,
    camera: Option<Box<dyn Camera>>,
    extractor: LandmarkExtractor,
    classifier: GestureClassifier,
    judge: GestureJudge,
    timers: RoundTimers,
    scheduler: TickScheduler<SessionTask>,
    active: bool,
    status: Option<Verdict>,
    latest_verdict: Verdict,
    last_percent: f64,
    preview: Option<Frame>,
}

impl RecognitionSession {
    pub fn new(
        config: RecognitionConfig,
        cameras: Box<dyn CameraProvider>,
        extractor: LandmarkExtractor,
        classifier: GestureClassifier,
    ) -> Self {
        Self {
            judge: GestureJudge::new(config.target),
            timers: RoundTimers::new(config.hold_secs, config.time_budget_secs),
            config,
            cameras,
            camera: None,
            extractor,
            classifier,
            scheduler: TickScheduler::new(),
            active: false,
            status: None,
            latest_verdict: Verdict::NoHand,
            last_percent: 0.0,
            preview: None,
        }
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }

    /// Switch to another round's parameters. Leaves the screen first.
    pub fn reconfigure(&mut self, config: RecognitionConfig) {
        self.leave();
        self.judge = GestureJudge::new(config.target);
        self.timers = RoundTimers::new(config.hold_secs, config.time_budget_secs);
        self.config = config;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    pub fn timer_state(&self) -> TimerState {
        self.timers.state()
    }

    pub fn status(&self) -> Option<Verdict> {
        self.status
    }

    /// Last processed frame, with landmarks drawn when a hand was found.
    pub fn preview(&self) -> Option<&Frame> {
        self.preview.as_ref()
    }

    /// Reset the round, acquire the camera and start the periodic tasks.
    pub fn enter(&mut self, now: f64) {
        self.leave();
        self.timers.reset();
        self.status = None;
        self.latest_verdict = Verdict::NoHand;
        self.last_percent = 0.0;
        self.preview = None;

        self.camera = match self.cameras.open(self.config.camera_index) {
            Ok(camera) => Some(camera),
            Err(e) => {
                warn!("{e}; the round will run without frames");
                None
            }
        };

        self.active = true;
        let frame_period = 1.0 / self.config.frame_rate_hz.max(1.0);
        self.scheduler.schedule_interval(SessionTask::Frame, frame_period, now);
        if self.config.hold_drive == HoldDrive::SubTick {
            self.scheduler
                .schedule_interval(SessionTask::HoldSubTick, 1.0 / HOLD_SUBTICK_HZ, now);
        }
        if self.timers.is_timed() {
            self.scheduler
                .schedule_interval(SessionTask::Countdown, COUNTDOWN_PERIOD_SECS, now);
        }
        info!(
            "recognition started: target={:?} hold={}s budget={}s",
            self.config.target, self.config.hold_secs, self.config.time_budget_secs
        );
    }

    /// Cancel every pending task and release the camera. Safe to call twice.
    pub fn leave(&mut self) {
        self.scheduler.cancel_all();
        self.camera = None;
        self.active = false;
    }

    /// Run every tick due at or before `now`, one at a time in time order.
    /// Each task fires at most once per call; a late call does not replay
    /// the frames it missed.
    pub fn pump(&mut self, now: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while self.active {
            let Some(tick) = self.scheduler.next_due(now) else {
                break;
            };
            match tick.task {
                SessionTask::Frame => self.on_frame(tick.dt, &mut events),
                SessionTask::HoldSubTick => {
                    let is_match = self.latest_verdict.is_match();
                    self.advance_hold(is_match, tick.dt, &mut events);
                }
                SessionTask::Countdown => self.on_countdown(&mut events),
            }
        }
        events
    }

    fn on_frame(&mut self, dt: f64, events: &mut Vec<SessionEvent>) {
        if !self.active {
            return;
        }
        let Some(frame) = self.camera.as_mut().and_then(|camera| camera.read()) else {
            return;
        };
        let seq = frame.seq();

        let observation = match self.extractor.extract(&frame) {
            None => {
                self.preview = Some(frame);
                FrameObservation::NoHand
            }
            Some(landmarks) => {
                self.preview = Some(frame.with_landmarks(&landmarks));
                let features = FeatureVector::from_landmarks(&landmarks);
                match self.classifier.classify(&features) {
                    Ok(result) => FrameObservation::Classified(result),
                    Err(e) => {
                        warn!("frame {seq}: {e}");
                        FrameObservation::ClassifierFailed
                    }
                }
            }
        };

        let verdict = self.judge.judge(observation);
        debug!("frame {seq}: {verdict:?}");
        if self.status != Some(verdict) {
            self.status = Some(verdict);
            events.push(SessionEvent::Status(verdict));
        }
        self.latest_verdict = verdict;

        if self.config.hold_drive == HoldDrive::FrameTick {
            self.advance_hold(verdict.is_match(), dt, events);
        }
    }

    fn advance_hold(&mut self, is_match: bool, dt: f64, events: &mut Vec<SessionEvent>) {
        if !self.active {
            return;
        }
        let event = self.timers.on_match(is_match, dt);

        let percent = self.timers.state().hold_percent;
        if percent != self.last_percent {
            self.last_percent = percent;
            events.push(SessionEvent::HoldProgress { percent });
        }

        if event == Some(RoundEvent::Succeeded) {
            self.finish(events, SessionEvent::Succeeded);
        }
    }

    fn on_countdown(&mut self, events: &mut Vec<SessionEvent>) {
        if !self.active {
            return;
        }
        match self.timers.on_countdown() {
            Some(RoundEvent::CountdownTick { remaining }) => events.push(SessionEvent::CountdownTick {
                remaining,
                percent: self.timers.countdown_percent().unwrap_or(0.0),
            }),
            Some(RoundEvent::Failed) => {
                events.push(SessionEvent::CountdownTick {
                    remaining: 0,
                    percent: 0.0,
                });
                self.finish(events, SessionEvent::Failed);
            }
            _ => {}
        }
    }

    /// Terminal transition: stop every other task before anything else runs.
    fn finish(&mut self, events: &mut Vec<SessionEvent>, outcome: SessionEvent) {
        self.scheduler.cancel_all();
        info!("recognition finished: target={:?} outcome={:?}", self.config.target, outcome);
        events.push(outcome);
    }
}

impl Drop for RecognitionSession {
    fn drop(&mut self) {
        self.leave();
    }
}
