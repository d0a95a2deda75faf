use ndarray::Array4;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tract_onnx::prelude::*;
use tracing::{info, warn};

use crate::models::ClassLabel;
use crate::preprocess::INPUT_SIZE;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load model from {}: {message}", path.display())]
    Load { path: PathBuf, message: String },

    #[error("failed to build model: {0}")]
    Build(String),

    #[error("model inference failed: {0}")]
    Inference(String),

    #[error("model returned no scores")]
    EmptyOutput,

    #[error("predicted class index {index} is outside the {labels} known labels")]
    UnknownClass { index: usize, labels: usize },
}

/// Anything that maps a preprocessed batch to raw per-class scores.
pub trait Classifier: Send + Sync {
    /// Returns the scores for the first image in `batch`, one per class.
    fn predict(&self, batch: Array4<f32>) -> Result<Vec<f32>, ModelError>;
}

/// ONNX export of the trained network, executed with tract.
pub struct OnnxClassifier {
    plan: TypedRunnableModel<TypedModel>,
}

impl OnnxClassifier {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let load_err = |e: TractError| ModelError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let model = tract_onnx::onnx().model_for_path(path).map_err(load_err)?;
        let classifier = Self::from_inference_model(model).map_err(load_err)?;

        info!("Loaded model from {}", path.display());
        Ok(classifier)
    }

    /// Builds a classifier from an already decoded ONNX graph.
    pub fn from_proto(proto: &tract_onnx::pb::ModelProto) -> Result<Self, ModelError> {
        tract_onnx::onnx()
            .model_for_proto_model(proto)
            .and_then(Self::from_inference_model)
            .map_err(|e| ModelError::Build(e.to_string()))
    }

    /// Pins the input to a single NHWC image and optimizes the graph.
    fn from_inference_model(model: InferenceModel) -> TractResult<Self> {
        let size = INPUT_SIZE as usize;
        let plan = model
            .with_input_fact(0, f32::fact([1, size, size, 3]).into())?
            .into_optimized()?
            .into_runnable()?;
        Ok(Self { plan })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, batch: Array4<f32>) -> Result<Vec<f32>, ModelError> {
        let shape = batch.dim();
        let tensor = tract_ndarray::Array4::from_shape_vec(shape, batch.into_raw_vec())
            .map_err(|e| ModelError::Inference(e.to_string()))?
            .into_tensor();

        let result = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let output = result[0]
            .to_array_view::<f32>()
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        Ok(output.iter().copied().collect())
    }
}

/// Normalizes raw scores into a probability distribution.
pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index and value of the largest probability. Ties resolve to the first index.
pub fn argmax(probabilities: &[f32]) -> Option<(usize, f32)> {
    probabilities
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, p)| match best {
            Some((_, bp)) if bp >= p => best,
            _ => Some((i, p)),
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: ClassLabel,
    pub probability: f32,
}

/// Runs the model on `batch` and picks the most probable label.
pub fn classify(classifier: &dyn Classifier, batch: Array4<f32>) -> Result<Classification, ModelError> {
    let scores = classifier.predict(batch)?;
    if scores.len() != ClassLabel::ALL.len() {
        warn!(
            "Model produced {} scores for {} labels",
            scores.len(),
            ClassLabel::ALL.len()
        );
    }

    let probabilities = softmax(&scores);
    let (index, probability) = argmax(&probabilities).ok_or(ModelError::EmptyOutput)?;
    let label = ClassLabel::from_index(index).ok_or(ModelError::UnknownClass {
        index,
        labels: ClassLabel::ALL.len(),
    })?;

    Ok(Classification { label, probability })
}
