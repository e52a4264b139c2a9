//! Recorded camera and detector implementations.
//!
//! Used for offline simulation of a session: frames are synthesized blank
//! images and the detector answers from a per-frame script.

use std::collections::VecDeque;
use std::sync::Arc;

use glam::Vec2;
use parking_lot::Mutex;

use crate::error::{CameraError, DetectorError};
use crate::vision::extractor::{Camera, CameraProvider, DetectedHand, HandDetector};
use crate::vision::frame::Frame;

const REPLAY_WIDTH: u32 = 64;
const REPLAY_HEIGHT: u32 = 48;

/// One scripted detector answer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedFrame {
    NoHand,
    Hand(Vec<Vec2>),
    DetectorFailure,
}

/// Emits blank frames numbered from 0 until the budget runs out.
pub struct ReplayCamera {
    next_seq: u64,
    remaining: usize,
}

impl ReplayCamera {
    pub fn new(frame_count: usize) -> Self {
        Self {
            next_seq: 0,
            remaining: frame_count,
        }
    }
}

impl Camera for ReplayCamera {
    fn read(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let frame = Frame::blank(REPLAY_WIDTH, REPLAY_HEIGHT, self.next_seq);
        self.next_seq += 1;
        Some(frame)
    }
}

/// Opens a fresh [`ReplayCamera`] on every acquisition, or always fails.
pub struct ReplayCameraProvider {
    frame_count: Option<usize>,
}

impl ReplayCameraProvider {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count: Some(frame_count),
        }
    }

    pub fn unavailable() -> Self {
        Self { frame_count: None }
    }
}

impl CameraProvider for ReplayCameraProvider {
    fn open(&self, index: u32) -> Result<Box<dyn Camera>, CameraError> {
        match self.frame_count {
            Some(n) => Ok(Box::new(ReplayCamera::new(n))),
            None => Err(CameraError::Unavailable {
                index,
                reason: "no replay device".to_string(),
            }),
        }
    }
}

/// Answers detection queries from a queue of scripted frames.
/// Once the script is exhausted every frame reports no hand.
pub struct ScriptedDetector {
    script: ScriptHandle,
}

impl ScriptedDetector {
    pub fn new(script: impl IntoIterator<Item = ScriptedFrame>) -> Self {
        let detector = Self {
            script: ScriptHandle::default(),
        };
        detector.script.replace(script);
        detector
    }

    /// Handle for feeding the script after the detector has been boxed.
    pub fn handle(&self) -> ScriptHandle {
        self.script.clone()
    }

    pub fn push(&mut self, frame: ScriptedFrame) {
        self.script.push(frame);
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectedHand>, DetectorError> {
        match self.script.pop() {
            None | Some(ScriptedFrame::NoHand) => Ok(Vec::new()),
            Some(ScriptedFrame::Hand(points)) => Ok(vec![DetectedHand { points, score: 1.0 }]),
            Some(ScriptedFrame::DetectorFailure) => {
                Err(DetectorError(format!("scripted failure at frame {}", frame.seq())))
            }
        }
    }
}

/// Shared view of a detector's pending script.
#[derive(Clone, Default)]
pub struct ScriptHandle {
    frames: Arc<Mutex<VecDeque<ScriptedFrame>>>,
}

impl ScriptHandle {
    pub fn push(&self, frame: ScriptedFrame) {
        self.frames.lock().push_back(frame);
    }

    /// Drop whatever is pending and queue `script` instead.
    pub fn replace(&self, script: impl IntoIterator<Item = ScriptedFrame>) {
        let mut frames = self.frames.lock();
        frames.clear();
        frames.extend(script);
    }

    pub fn pending(&self) -> usize {
        self.frames.lock().len()
    }

    fn pop(&self) -> Option<ScriptedFrame> {
        self.frames.lock().pop_front()
    }
}
