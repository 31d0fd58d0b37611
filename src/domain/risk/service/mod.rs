//! Crop-failure risk scoring.
//!
//! Maps categorical inputs through the trained encoders, derives the
//! seasonal deviation features, runs the classifier and turns the failure
//! probability into a tiered, explained assessment.

pub mod explanation;

use crate::api::dto::risk_dto::{DistrictInfoDto, RiskPredictionRequest, RiskPredictionResponse};
use crate::core::catalog::season;
use crate::core::model::artifacts::RiskArtifacts;
use crate::core::util::feature_util::FeatureUtil;
use crate::errors::{internal_error, AppError};

/// How many known crops an unknown-crop error suggests back.
const SUGGESTED_CROPS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f32) -> Self {
        if score < 30.0 {
            Self::Low
        } else if score < 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "orange",
            Self::High => "red",
        }
    }
}

pub struct RiskService {
    artifacts: Option<RiskArtifacts>,
}

impl RiskService {
    pub fn new(artifacts: Option<RiskArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn model_loaded(&self) -> bool {
        self.artifacts.is_some()
    }

    pub fn crops(&self) -> Vec<String> {
        self.artifacts
            .as_ref()
            .map(|a| a.crop_encoder.classes().to_vec())
            .unwrap_or_default()
    }

    pub fn states(&self) -> Vec<String> {
        self.artifacts
            .as_ref()
            .map(|a| a.state_encoder.classes().to_vec())
            .unwrap_or_default()
    }

    pub fn districts(&self) -> Vec<String> {
        self.artifacts
            .as_ref()
            .map(|a| a.districts.district_names())
            .unwrap_or_default()
    }

    pub fn predict(&self, req: &RiskPredictionRequest) -> Result<RiskPredictionResponse, AppError> {
        let artifacts = self.artifacts.as_ref().ok_or_else(|| {
            AppError::ModelUnavailable(
                "Crop failure model not available. Export the model artifacts first.".to_string(),
            )
        })?;

        let crop_encoded = artifacts.crop_encoder.transform(&req.crop).ok_or_else(|| {
            AppError::UnknownCategory {
                message: format!("Crop \"{}\" not found in training data", req.crop),
                available: artifacts
                    .crop_encoder
                    .classes()
                    .iter()
                    .take(SUGGESTED_CROPS)
                    .cloned()
                    .collect(),
            }
        })?;

        let state_encoded = artifacts.state_encoder.transform(&req.state).ok_or_else(|| {
            AppError::UnknownCategory {
                message: format!("State \"{}\" not found in training data", req.state),
                available: artifacts.state_encoder.classes().to_vec(),
            }
        })?;

        let soil = artifacts.districts.lookup(&req.district, &req.state);

        let rainfall_deviation =
            FeatureUtil::deviation_pct(req.rainfall, season::rainfall_baseline(&req.season));
        let temperature_deviation =
            FeatureUtil::deviation_pct(req.temperature, season::temperature_baseline(&req.season));
        let severity_score = FeatureUtil::severity_score(req.disaster_occurred);

        // Order is fixed by the training pipeline.
        let features = [
            crop_encoded as f32,
            state_encoded as f32,
            f32::from(season::encode(&req.season)),
            req.temperature,
            req.rainfall,
            req.humidity,
            soil.soil_quality,
            rainfall_deviation,
            temperature_deviation,
            f32::from(req.disaster_occurred),
            severity_score,
        ];

        let probabilities = artifacts.model.predict_proba(&features).map_err(internal_error)?;
        let failure_probability = probabilities
            .get(1)
            .copied()
            .ok_or_else(|| internal_error("risk model emitted no failure-class probability"))?;

        let risk_score = FeatureUtil::round2(failure_probability * 100.0);
        let level = RiskLevel::from_score(risk_score);

        Ok(RiskPredictionResponse {
            risk_score,
            risk_level: level.label(),
            color: level.color(),
            explanation: explanation::generate(
                rainfall_deviation,
                temperature_deviation,
                soil.soil_quality,
                req.disaster_occurred,
            ),
            recommendations: explanation::recommendations(level, &req.crop, &req.season),
            district_info: DistrictInfoDto {
                soil_type: soil.soil_type,
                soil_quality: soil.soil_quality,
                state: req.state.clone(),
                district: req.district.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::district::DistrictTable;
    use crate::core::model::encoder::LabelEncoder;
    use crate::core::model::tabular::ProbabilityModel;
    use std::sync::{Arc, Mutex};

    struct MockModel {
        probabilities: Vec<f32>,
        seen: Arc<Mutex<Vec<Vec<f32>>>>,
    }

    impl ProbabilityModel for MockModel {
        fn predict_proba(&self, features: &[f32]) -> anyhow::Result<Vec<f32>> {
            self.seen.lock().unwrap().push(features.to_vec());
            Ok(self.probabilities.clone())
        }
    }

    fn service_with(
        failure_probability: f32,
    ) -> (RiskService, Arc<Mutex<Vec<Vec<f32>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let artifacts = RiskArtifacts {
            model: Box::new(MockModel {
                probabilities: vec![1.0 - failure_probability, failure_probability],
                seen: Arc::clone(&seen),
            }),
            crop_encoder: LabelEncoder::new(vec![
                "Cotton".to_string(),
                "Rice".to_string(),
                "Wheat".to_string(),
            ]),
            state_encoder: LabelEncoder::new(vec![
                "Maharashtra".to_string(),
                "Punjab".to_string(),
            ]),
            districts: serde_json::from_value(serde_json::json!({
                "Ludhiana, Punjab": { "soil_type": "Alluvial", "soil_quality": 0.82 }
            }))
            .unwrap(),
        };
        (RiskService::new(Some(artifacts)), seen)
    }

    fn request() -> RiskPredictionRequest {
        serde_json::from_value(serde_json::json!({
            "crop": "Rice",
            "state": "Punjab",
            "district": "Ludhiana",
            "season": "Kharif",
            "temperature": 28.0,
            "rainfall": 1200.0,
            "humidity": 75.0,
            "disaster_occurred": 1
        }))
        .unwrap()
    }

    #[test]
    fn feature_vector_follows_training_order() {
        let (service, seen) = service_with(0.2);
        service.predict(&request()).unwrap();

        let features = seen.lock().unwrap()[0].clone();
        // [crop, state, season, temp, rain, humidity, soil, rain_dev, temp_dev, disaster, severity]
        assert_eq!(features.len(), 11);
        assert_eq!(features[0], 1.0); // Rice
        assert_eq!(features[1], 1.0); // Punjab
        assert_eq!(features[2], 1.0); // Kharif
        assert_eq!(features[3], 28.0);
        assert_eq!(features[4], 1200.0);
        assert_eq!(features[5], 75.0);
        assert_eq!(features[6], 0.82);
        assert_eq!(features[7], 0.0); // 1200mm on the 1200mm Kharif baseline
        assert_eq!(features[8], 0.0); // 28°C on the 28°C Kharif baseline
        assert_eq!(features[9], 1.0);
        assert_eq!(features[10], 2.0);
    }

    #[test]
    fn risk_tiers_follow_score_thresholds() {
        let low = service_with(0.25).0.predict(&request()).unwrap();
        assert_eq!(low.risk_score, 25.0);
        assert_eq!(low.risk_level, "Low");
        assert_eq!(low.color, "green");

        let medium = service_with(0.45).0.predict(&request()).unwrap();
        assert_eq!(medium.risk_level, "Medium");
        assert_eq!(medium.color, "orange");

        let high = service_with(0.75).0.predict(&request()).unwrap();
        assert_eq!(high.risk_level, "High");
        assert_eq!(high.color, "red");
    }

    #[test]
    fn boundary_scores_round_up_a_tier() {
        // 0.2999 rounds to 29.99 and stays Low; 0.5999 rounds to 59.99, Medium.
        assert_eq!(RiskLevel::from_score(29.99), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(59.99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60.0), RiskLevel::High);
    }

    #[test]
    fn unknown_crop_suggests_known_crops() {
        let (service, _) = service_with(0.2);
        let mut req = request();
        req.crop = "Dragonfruit".to_string();

        match service.predict(&req) {
            Err(AppError::UnknownCategory { message, available }) => {
                assert!(message.contains("Dragonfruit"));
                assert_eq!(available, vec!["Cotton", "Rice", "Wheat"]);
            }
            other => panic!("expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn unknown_district_uses_default_soil_profile() {
        let (service, seen) = service_with(0.2);
        let mut req = request();
        req.district = "Amritsar".to_string();

        let response = service.predict(&req).unwrap();
        assert_eq!(response.district_info.soil_type, "Alluvial");
        assert_eq!(response.district_info.soil_quality, 0.70);
        assert_eq!(seen.lock().unwrap()[0][6], 0.70);
    }

    #[test]
    fn unloaded_model_is_service_unavailable() {
        let service = RiskService::new(None);
        assert!(matches!(
            service.predict(&request()),
            Err(AppError::ModelUnavailable(_))
        ));
        assert!(service.crops().is_empty());
    }
}
