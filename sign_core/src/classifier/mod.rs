pub mod model;

use std::sync::Arc;

use sign_schema::{Vowel, VOWEL_COUNT};

use crate::error::ClassifyError;
use crate::vision::FeatureVector;

pub use model::{GestureModel, LinearSoftmaxModel};

/// Best class for one frame. Produced fresh every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub class_index: usize,
    pub confidence: f32,
}

impl Classification {
    pub fn vowel(&self) -> Option<Vowel> {
        Vowel::from_index(self.class_index)
    }
}

/// Wraps the process-wide model. Cloning shares the loaded model.
#[derive(Clone)]
pub struct GestureClassifier {
    model: Arc<dyn GestureModel>,
}

impl GestureClassifier {
    pub fn new(model: Arc<dyn GestureModel>) -> Self {
        Self { model }
    }

    pub fn classify(&self, features: &FeatureVector) -> Result<Classification, ClassifyError> {
        let proba = self.model.predict_proba(features.as_slice())?;
        if proba.len() != VOWEL_COUNT {
            return Err(ClassifyError::ClassCount {
                expected: VOWEL_COUNT,
                actual: proba.len(),
            });
        }
        if proba.iter().any(|p| !p.is_finite()) {
            return Err(ClassifyError::NonFinite);
        }

        // Ties resolve to the lowest index.
        let (class_index, confidence) = proba
            .iter()
            .enumerate()
            .fold((0, f32::NEG_INFINITY), |best, (i, p)| if *p > best.1 { (i, *p) } else { best });

        Ok(Classification {
            class_index,
            confidence,
        })
    }
}
