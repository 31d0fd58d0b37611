//! Model artifact directory layout and startup loading.
//!
//! Each model group lives in its own subdirectory of the configured model
//! root: the ONNX graph plus the JSON sidecars (scaler parameters, encoder
//! class lists, district soil table) exported with it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::core::catalog::district::DistrictTable;

use super::encoder::LabelEncoder;
use super::scaler::StandardScaler;
use super::tabular::{OnnxTabularModel, ProbabilityModel};
use super::vision::{ImageClassifier, OnnxImageClassifier};

pub const CROP_FAILURE_DIR: &str = "crop_failure";
pub const RECOMMENDATION_DIR: &str = "recommendation";
pub const DISEASE_DIR: &str = "disease";

/// Everything the failure-risk predictor needs.
pub struct RiskArtifacts {
    pub model: Box<dyn ProbabilityModel>,
    pub crop_encoder: LabelEncoder,
    pub state_encoder: LabelEncoder,
    pub districts: DistrictTable,
}

/// Everything the crop recommender needs.
pub struct RecommendationArtifacts {
    pub model: Box<dyn ProbabilityModel>,
    pub encoder: LabelEncoder,
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open artifact {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse artifact {}", path.display()))
}

pub fn load_risk_artifacts(model_root: &Path) -> Result<RiskArtifacts> {
    let dir = model_root.join(CROP_FAILURE_DIR);
    let scaler: StandardScaler = load_json(&dir.join("scaler.json"))?;
    let model = OnnxTabularModel::load(&dir.join("model.onnx"), scaler)?;

    Ok(RiskArtifacts {
        model: Box::new(model),
        crop_encoder: load_json(&dir.join("crop_encoder.json"))?,
        state_encoder: load_json(&dir.join("state_encoder.json"))?,
        districts: load_json(&dir.join("district_info.json"))?,
    })
}

pub fn load_recommendation_artifacts(model_root: &Path) -> Result<RecommendationArtifacts> {
    let dir = model_root.join(RECOMMENDATION_DIR);
    let scaler: StandardScaler = load_json(&dir.join("scaler.json"))?;
    let model = OnnxTabularModel::load(&dir.join("model.onnx"), scaler)?;

    Ok(RecommendationArtifacts {
        model: Box::new(model),
        encoder: load_json(&dir.join("label_encoder.json"))?,
    })
}

pub fn load_disease_classifier(model_root: &Path) -> Result<Box<dyn ImageClassifier>> {
    let dir = model_root.join(DISEASE_DIR);
    let classifier = OnnxImageClassifier::load(&dir.join("model.onnx"))?;
    Ok(Box::new(classifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_json_reads_encoder_sidecars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crop_encoder.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"classes": ["Maize", "Rice"]}}"#).unwrap();

        let encoder: LabelEncoder = load_json(&path).unwrap();
        assert_eq!(encoder.transform("Rice"), Some(1));
    }

    #[test]
    fn missing_artifact_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json::<LabelEncoder>(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
