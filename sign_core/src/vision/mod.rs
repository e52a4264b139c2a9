pub mod extractor;
pub mod frame;
pub mod landmarks;
pub mod replay;

pub use extractor::{Camera, CameraProvider, DetectedHand, HandDetector, LandmarkExtractor, MIN_DETECTION_CONFIDENCE};
pub use frame::{Frame, PixelFormat};
pub use landmarks::{FeatureVector, LandmarkSet, FEATURE_LEN, LANDMARK_COUNT};
