#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;
use sign_core::classifier::{GestureClassifier, GestureModel};
use sign_core::error::ModelError;
use sign_core::gameplay::{RecognitionConfig, RecognitionSession, SessionEvent, FRAME_RATE_HZ};
use sign_core::vision::replay::{ReplayCameraProvider, ScriptedDetector, ScriptedFrame};
use sign_core::vision::{CameraProvider, LandmarkExtractor, LANDMARK_COUNT};
use sign_schema::Vowel;

/// Always answers with the same distribution.
pub struct FixedModel(pub Vec<f32>);

impl GestureModel for FixedModel {
    fn predict_proba(&self, _features: &[f32]) -> Result<Vec<f32>, ModelError> {
        Ok(self.0.clone())
    }
}

/// Answers from a queue, then repeats the fallback.
pub struct QueuedModel {
    queue: Mutex<VecDeque<Vec<f32>>>,
    fallback: Vec<f32>,
}

impl QueuedModel {
    pub fn new(queue: Vec<Vec<f32>>, fallback: Vec<f32>) -> Self {
        Self {
            queue: Mutex::new(queue.into()),
            fallback,
        }
    }
}

impl GestureModel for QueuedModel {
    fn predict_proba(&self, _features: &[f32]) -> Result<Vec<f32>, ModelError> {
        Ok(self.queue.lock().pop_front().unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Probabilities putting `confidence` on `vowel` and spreading the rest.
pub fn proba(vowel: Vowel, confidence: f32) -> Vec<f32> {
    let rest = (1.0 - confidence) / 4.0;
    (0..5)
        .map(|i| if i == vowel.index() { confidence } else { rest })
        .collect()
}

pub fn hand_points() -> Vec<Vec2> {
    (0..LANDMARK_COUNT)
        .map(|i| Vec2::new(0.3 + i as f32 * 0.01, 0.5))
        .collect()
}

pub fn hands(n: usize) -> Vec<ScriptedFrame> {
    vec![ScriptedFrame::Hand(hand_points()); n]
}

pub fn no_hands(n: usize) -> Vec<ScriptedFrame> {
    vec![ScriptedFrame::NoHand; n]
}

pub fn session_with(
    config: RecognitionConfig,
    cameras: impl CameraProvider + 'static,
    script: Vec<ScriptedFrame>,
    model: impl GestureModel + 'static,
) -> RecognitionSession {
    RecognitionSession::new(
        config,
        Box::new(cameras),
        LandmarkExtractor::new(Box::new(ScriptedDetector::new(script))),
        GestureClassifier::new(Arc::new(model)),
    )
}

pub fn session(config: RecognitionConfig, script: Vec<ScriptedFrame>, model: impl GestureModel + 'static) -> RecognitionSession {
    session_with(config, ReplayCameraProvider::new(10_000), script, model)
}

pub const FRAME_STEP: f64 = 1.0 / FRAME_RATE_HZ;

/// Frame-grid times in `(from, to]`, the way a live loop calls `pump`.
pub fn frame_times(from: f64, to: f64) -> Vec<f64> {
    let first = (from / FRAME_STEP + 1e-6).floor() as u64 + 1;
    (first..)
        .map(|k| k as f64 * FRAME_STEP)
        .take_while(|now| *now <= to + 1e-9)
        .collect()
}

pub fn run_frames(session: &mut RecognitionSession, from: f64, to: f64) -> Vec<SessionEvent> {
    frame_times(from, to)
        .into_iter()
        .flat_map(|now| session.pump(now))
        .collect()
}
