use glam::Vec2;

use crate::error::VisionError;

/// Keypoints per hand in the MediaPipe hand model.
pub const LANDMARK_COUNT: usize = 21;
/// Two coordinates per landmark.
pub const FEATURE_LEN: usize = LANDMARK_COUNT * 2;

/// The 21 keypoints of one detected hand in normalized image coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: [Vec2; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [Vec2; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn from_points(points: &[Vec2]) -> Result<Self, VisionError> {
        let points: [Vec2; LANDMARK_COUNT] = points.try_into().map_err(|_| VisionError::LandmarkCount {
            expected: LANDMARK_COUNT,
            actual: points.len(),
        })?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Vec2; LANDMARK_COUNT] {
        &self.points
    }

    /// Top-left corner of the bounding box.
    pub fn min_corner(&self) -> Vec2 {
        self.points
            .iter()
            .fold(Vec2::splat(f32::INFINITY), |acc, p| acc.min(*p))
    }
}

/// Landmarks translated so the bounding box's top-left is the origin,
/// flattened as `[x0, y0, x1, y1, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_LEN]);

impl FeatureVector {
    pub fn from_landmarks(landmarks: &LandmarkSet) -> Self {
        let origin = landmarks.min_corner();
        let mut data = [0.0; FEATURE_LEN];
        for (i, point) in landmarks.points().iter().enumerate() {
            let shifted = *point - origin;
            data[i * 2] = shifted.x;
            data[i * 2 + 1] = shifted.y;
        }
        Self(data)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
