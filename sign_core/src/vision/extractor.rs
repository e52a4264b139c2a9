use glam::Vec2;
use log::{debug, warn};

use crate::error::{CameraError, DetectorError};
use crate::vision::frame::Frame;
use crate::vision::landmarks::LandmarkSet;

/// Detector-internal floor, separate from the classifier's match threshold.
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.3;

/// A source of sequential frames. Dropping it releases the device.
pub trait Camera {
    /// `None` when no frame could be read this tick.
    fn read(&mut self) -> Option<Frame>;
}

/// Acquires cameras by logical index (0 = default device).
pub trait CameraProvider {
    fn open(&self, index: u32) -> Result<Box<dyn Camera>, CameraError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedHand {
    pub points: Vec<Vec2>,
    pub score: f32,
}

/// Hand-pose estimator queried in still-image mode, once per frame.
pub trait HandDetector {
    /// Hands in the order the estimator reports them.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectedHand>, DetectorError>;
}

pub struct LandmarkExtractor {
    detector: Box<dyn HandDetector>,
    min_detection_confidence: f32,
}

impl LandmarkExtractor {
    pub fn new(detector: Box<dyn HandDetector>) -> Self {
        Self::with_min_confidence(detector, MIN_DETECTION_CONFIDENCE)
    }

    pub fn with_min_confidence(detector: Box<dyn HandDetector>, min_detection_confidence: f32) -> Self {
        Self {
            detector,
            min_detection_confidence,
        }
    }

    pub fn min_detection_confidence(&self) -> f32 {
        self.min_detection_confidence
    }

    /// Landmarks of the first hand above the confidence floor, if any.
    /// Detector failures count as "no hand".
    pub fn extract(&mut self, frame: &Frame) -> Option<LandmarkSet> {
        let hands = match self.detector.detect(frame) {
            Ok(hands) => hands,
            Err(e) => {
                warn!("frame {}: {}", frame.seq(), e);
                return None;
            }
        };

        let hand = hands
            .into_iter()
            .find(|h| h.score >= self.min_detection_confidence)?;

        match LandmarkSet::from_points(&hand.points) {
            Ok(set) => Some(set),
            Err(e) => {
                debug!("frame {}: discarding malformed hand: {}", frame.seq(), e);
                None
            }
        }
    }
}
