use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use sign_schema::VOWEL_COUNT;

use crate::error::ModelError;
use crate::vision::FEATURE_LEN;

/// A pre-trained probabilistic classifier over the five vowel classes.
pub trait GestureModel: Send + Sync {
    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f32>, ModelError>;
}

/// Multinomial logistic regression exported as JSON:
/// `{"classes": ["A","E","I","O","U"], "weights": [[..42..] x5], "bias": [..5..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSoftmaxModel {
    pub classes: Vec<String>,
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

impl LinearSoftmaxModel {
    pub fn new(classes: Vec<String>, weights: Vec<Vec<f32>>, bias: Vec<f32>) -> Result<Self, ModelError> {
        let model = Self { classes, weights, bias };
        model.validate()?;
        Ok(model)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.classes.len() != VOWEL_COUNT {
            return Err(ModelError::Shape(format!(
                "expected {VOWEL_COUNT} classes, got {}",
                self.classes.len()
            )));
        }
        if self.weights.len() != VOWEL_COUNT || self.bias.len() != VOWEL_COUNT {
            return Err(ModelError::Shape(format!(
                "expected {VOWEL_COUNT} weight rows and biases, got {} and {}",
                self.weights.len(),
                self.bias.len()
            )));
        }
        if let Some((row, w)) = self.weights.iter().enumerate().find(|(_, w)| w.len() != FEATURE_LEN) {
            return Err(ModelError::Shape(format!(
                "weight row {row} has {} entries, expected {FEATURE_LEN}",
                w.len()
            )));
        }
        Ok(())
    }
}

impl GestureModel for LinearSoftmaxModel {
    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f32>, ModelError> {
        if features.len() != FEATURE_LEN {
            return Err(ModelError::FeatureLength {
                expected: FEATURE_LEN,
                actual: features.len(),
            });
        }

        let logits: Vec<f32> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect();

        // Shift by the max logit for numerical stability.
        let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
        let total: f32 = exps.iter().sum();
        Ok(exps.into_iter().map(|e| e / total).collect())
    }
}
