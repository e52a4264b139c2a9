use std::{collections::VecDeque, fmt::Write as _, fs, path::Path, sync::Arc};

use anyhow::{bail, Context};
use glam::Vec2;
use log::{debug, info};
use parking_lot::Mutex;
use serde::Deserialize;
use sign_core::challenge::{ChallengeRunner, ChallengeSequencer, RunnerState};
use sign_core::classifier::{GestureClassifier, GestureModel, LinearSoftmaxModel};
use sign_core::context::{AppContext, RecordingNavigator};
use sign_core::error::ModelError;
use sign_core::gameplay::{RecognitionConfig, RecognitionSession, FRAME_RATE_HZ};
use sign_core::store::SharedStore;
use sign_core::time::{Clock, ManualClock};
use sign_core::vision::replay::{ReplayCameraProvider, ScriptHandle, ScriptedDetector, ScriptedFrame};
use sign_core::vision::{LandmarkExtractor, LANDMARK_COUNT};
use sign_schema::{Difficulty, Notification, RoundKind, RoundResult, Vowel};

/// Replay camera budget; the detector script decides what each frame shows.
const REPLAY_FRAMES: usize = 1_000_000;
/// Extra simulated time after a round's last recorded frame.
const ROUND_GRACE_SECS: f64 = 1.0;
/// Accepted `frameRateHz` range for a trace.
const FRAME_RATE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=240.0;

/// A recorded challenge attempt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    pub difficulty: Difficulty,
    #[serde(default = "default_frame_rate")]
    pub frame_rate_hz: f64,
    pub rounds: Vec<TraceRound>,
}

fn default_frame_rate() -> f64 {
    FRAME_RATE_HZ
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TraceRound {
    /// Typed rounds.
    pub answer: Option<String>,
    /// Gesture rounds, one entry per camera frame.
    pub frames: Vec<TraceFrame>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TraceFrame {
    /// Normalized landmark coordinates; absent when no hand was seen.
    pub hand: Option<Vec<[f32; 2]>>,
    /// Recorded classifier output, used when no model file is given.
    pub proba: Option<Vec<f32>>,
}

pub fn load_trace(path: &Path) -> anyhow::Result<Trace> {
    let bytes = fs::read(path).with_context(|| format!("failed to read trace: {}", path.display()))?;
    let trace: Trace =
        serde_json::from_slice(&bytes).with_context(|| format!("invalid trace: {}", path.display()))?;
    if trace.rounds.len() > 5 {
        bail!("trace has {} rounds, a challenge has 5", trace.rounds.len());
    }
    if !FRAME_RATE_RANGE.contains(&trace.frame_rate_hz) {
        bail!(
            "frameRateHz {} is outside {}..={}",
            trace.frame_rate_hz,
            FRAME_RATE_RANGE.start(),
            FRAME_RATE_RANGE.end()
        );
    }
    Ok(trace)
}

/// Replays recorded classifier outputs in order.
#[derive(Clone, Default)]
struct RecordedModel {
    outputs: Arc<Mutex<VecDeque<Vec<f32>>>>,
}

impl RecordedModel {
    fn replace(&self, outputs: Vec<Vec<f32>>) {
        *self.outputs.lock() = outputs.into();
    }
}

impl GestureModel for RecordedModel {
    fn predict_proba(&self, _features: &[f32]) -> Result<Vec<f32>, ModelError> {
        self.outputs
            .lock()
            .pop_front()
            .ok_or_else(|| ModelError::Backend("recorded outputs exhausted".to_string()))
    }
}

pub struct SimulationReport {
    pub difficulty: Difficulty,
    pub results: Vec<RoundResult>,
    pub state: RunnerState,
}

pub fn run(trace: &Trace, model: Option<LinearSoftmaxModel>, store: SharedStore) -> anyhow::Result<SimulationReport> {
    let detector = ScriptedDetector::new(Vec::new());
    let script = detector.handle();
    let recorded = RecordedModel::default();
    let uses_recorded = model.is_none();
    let model: Arc<dyn GestureModel> = match model {
        Some(model) => Arc::new(model),
        None => Arc::new(recorded.clone()),
    };

    let session = RecognitionSession::new(
        RecognitionConfig::new(Vowel::A).frame_rate_hz(trace.frame_rate_hz),
        Box::new(ReplayCameraProvider::new(REPLAY_FRAMES)),
        LandmarkExtractor::new(Box::new(detector)),
        GestureClassifier::new(model),
    );
    let ctx = AppContext::new(Box::new(RecordingNavigator::new()), store).context("failed to open progress store")?;
    let mut runner = ChallengeRunner::new(ChallengeSequencer::standard(trace.difficulty), session, ctx);

    let clock = ManualClock::new(0.0);
    let step = 1.0 / trace.frame_rate_hz;
    runner.start(clock.now());

    for (i, round) in trace.rounds.iter().enumerate() {
        if runner.state().is_finished() {
            break;
        }
        let Some((kind, budget)) = runner.sequencer().current().map(|r| (r.kind, r.time_budget_secs)) else {
            break;
        };
        debug!("replaying round {} ({:?})", i + 1, kind);

        match kind {
            RoundKind::Typed => {
                let answer = round.answer.as_deref().unwrap_or("");
                runner.submit_answer(answer, clock.now())?;
            }
            RoundKind::Gesture => {
                load_round(i, round, &script, uses_recorded.then_some(&recorded))?;
                let recorded_secs = round.frames.len() as f64 * step;
                let deadline = clock.now() + recorded_secs.max(budget as f64) + ROUND_GRACE_SECS;
                while runner.sequencer().index() == i && !runner.state().is_finished() && clock.now() < deadline {
                    let now = clock.advance(step);
                    runner.pump(now)?;
                }
            }
        }
    }

    if !runner.state().is_finished() {
        info!("trace ended before the challenge finished");
        runner.leave();
    }

    Ok(SimulationReport {
        difficulty: trace.difficulty,
        results: runner.sequencer().results().to_vec(),
        state: runner.state().clone(),
    })
}

fn load_round(
    index: usize,
    round: &TraceRound,
    script: &ScriptHandle,
    recorded: Option<&RecordedModel>,
) -> anyhow::Result<()> {
    let mut frames = Vec::with_capacity(round.frames.len());
    let mut outputs = Vec::new();
    for (f, frame) in round.frames.iter().enumerate() {
        let Some(hand) = &frame.hand else {
            frames.push(ScriptedFrame::NoHand);
            continue;
        };
        frames.push(ScriptedFrame::Hand(hand.iter().map(|[x, y]| Vec2::new(*x, *y)).collect()));
        // Malformed hands never reach the classifier.
        if hand.len() != LANDMARK_COUNT {
            continue;
        }
        if recorded.is_some() {
            match &frame.proba {
                Some(proba) => outputs.push(proba.clone()),
                None => bail!(
                    "round {} frame {} has a hand but no recorded proba; pass --model",
                    index + 1,
                    f + 1
                ),
            }
        }
    }
    script.replace(frames);
    if let Some(model) = recorded {
        model.replace(outputs);
    }
    Ok(())
}

pub fn render(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "challenge: {}", report.difficulty.display_name());
    let _ = writeln!(out, "{:<6} {:<7} {}", "round", "target", "outcome");
    for result in &report.results {
        let _ = writeln!(
            out,
            "{:<6} {:<7} {:?}",
            result.round_index + 1,
            result.target.letter(),
            result.outcome
        );
    }

    match &report.state {
        RunnerState::Completed(completion) => {
            let _ = writeln!(out, "result: completed");
            for notification in &completion.notifications {
                let _ = writeln!(out, "{}", describe(notification));
            }
        }
        RunnerState::Aborted(outcome) => {
            let _ = writeln!(out, "result: aborted ({outcome:?})");
        }
        RunnerState::Abandoned | RunnerState::NotStarted | RunnerState::Running => {
            let _ = writeln!(out, "result: abandoned");
        }
    }
    out
}

fn describe(notification: &Notification) -> String {
    match notification {
        Notification::ChallengeComplete(difficulty) => {
            format!("notify: {} Vowels Challenge complete", difficulty.display_name())
        }
        Notification::AchievementUnlocked(achievement) => format!("notify: {}", achievement.title()),
    }
}
