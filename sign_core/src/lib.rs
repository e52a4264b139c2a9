pub mod audio;
pub mod challenge;
pub mod classifier;
pub mod context;
pub mod error;
pub mod gameplay;
pub mod practice;
pub mod settings;
pub mod store;
pub mod time;
pub mod vision;

pub use error::{CameraError, ClassifyError, DetectorError, ModelError, StoreError, VisionError};
