//! Standard scaler parameters exported from the training pipeline.

use anyhow::{bail, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Self {
        Self { mean, scale }
    }

    /// `(x - mean) / scale`, element-wise.
    pub fn transform(&self, features: &[f32]) -> Result<Vec<f32>> {
        if self.mean.len() != self.scale.len() {
            bail!(
                "scaler artifact is inconsistent: {} means vs {} scales",
                self.mean.len(),
                self.scale.len()
            );
        }
        if features.len() != self.mean.len() {
            bail!(
                "feature vector has {} values but the scaler expects {}",
                features.len(),
                self.mean.len()
            );
        }

        Ok(features
            .iter()
            .zip(self.mean.iter())
            .zip(self.scale.iter())
            .map(|((x, m), s)| (x - m) / s)
            .collect())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_centers_and_scales() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 4.0]);
        let out = scaler.transform(&[14.0, -8.0]).unwrap();
        assert_eq!(out, vec![2.0, -2.0]);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let scaler = StandardScaler::new(vec![0.0; 11], vec![1.0; 11]);
        assert!(scaler.transform(&[1.0, 2.0]).is_err());
    }
}
