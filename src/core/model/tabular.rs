//! Tabular classifier inference over ONNX sessions.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::{Session, SessionOutputs};
use ort::value::Tensor;

use super::scaler::StandardScaler;

/// Classifier exposing class probabilities for one feature vector.
///
/// Implemented by the ONNX-backed model; tests substitute mocks.
pub trait ProbabilityModel: Send + Sync {
    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f32>>;
}

/// ONNX classifier with its feature scaler applied on the way in.
///
/// The session is loaded once and shared read-only; `ort` requires `&mut`
/// to run, so calls briefly serialize on an internal mutex.
pub struct OnnxTabularModel {
    session: Mutex<Session>,
    scaler: StandardScaler,
}

impl OnnxTabularModel {
    pub fn load(model_path: &Path, scaler: StandardScaler) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model {}", model_path.display()))?;

        Ok(Self {
            session: Mutex::new(session),
            scaler,
        })
    }
}

impl ProbabilityModel for OnnxTabularModel {
    fn predict_proba(&self, features: &[f32]) -> Result<Vec<f32>> {
        let scaled = self.scaler.transform(features)?;
        let input = Tensor::from_array(([1usize, scaled.len()], scaled))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow!("inference session mutex poisoned"))?;
        let outputs = session.run(ort::inputs![input])?;
        extract_probabilities(&outputs)
    }
}

/// First rank-2 `f32` output, row 0. Classifiers exported with plain tensor
/// probability outputs always match this; the label output (int64) does not.
pub(crate) fn extract_probabilities(outputs: &SessionOutputs<'_>) -> Result<Vec<f32>> {
    for (_name, value) in outputs.iter() {
        if let Ok((shape, data)) = value.try_extract_tensor::<f32>() {
            let dims: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
            if dims.len() == 2 && dims[0] == 1 {
                return Ok(data[..dims[1]].to_vec());
            }
        }
    }
    Err(anyhow!("model produced no probability tensor"))
}

/// Index and value of the largest probability.
pub fn argmax(probabilities: &[f32]) -> Option<(usize, f32)> {
    probabilities
        .iter()
        .copied()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::argmax;

    #[test]
    fn argmax_picks_the_largest_probability() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some((1, 0.7)));
        assert_eq!(argmax(&[]), None);
    }
}
