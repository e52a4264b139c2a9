use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("expected {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },
    #[error("frame buffer is {actual} bytes, expected {expected} for {width}x{height}x3")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera {index} is not available: {reason}")]
    Unavailable { index: u32, reason: String },
}

#[derive(Debug, Error)]
#[error("hand detector failed: {0}")]
pub struct DetectorError(pub String);

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid model json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid model shape: {0}")]
    Shape(String),
    #[error("model expects {expected} features, got {actual}")]
    FeatureLength { expected: usize, actual: usize },
    #[error("model backend failed: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("model returned {actual} probabilities, expected {expected}")]
    ClassCount { expected: usize, actual: usize },
    #[error("model returned a non-finite probability")]
    NonFinite,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no progress record at {0}")]
    NotFound(String),
    #[error("progress record is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("progress store i/o failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("username cannot be empty")]
    EmptyUsername,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
