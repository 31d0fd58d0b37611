//! Crop recommendation from soil and climate measurements.

use serde_json::{json, Value};

use crate::api::dto::recommendation_dto::{
    CropDetails, CropRecommendationRequest, CropRecommendationResponse, SoilAnalysis,
};
use crate::core::catalog::crop_facts;
use crate::core::model::artifacts::RecommendationArtifacts;
use crate::core::model::tabular::argmax;
use crate::errors::{internal_error, AppError};

/// How many runner-up crops the response suggests.
const ALTERNATIVE_COUNT: usize = 3;

pub struct RecommendationService {
    artifacts: Option<RecommendationArtifacts>,
}

impl RecommendationService {
    pub fn new(artifacts: Option<RecommendationArtifacts>) -> Self {
        Self { artifacts }
    }

    pub fn model_loaded(&self) -> bool {
        self.artifacts.is_some()
    }

    pub fn recommend(
        &self,
        req: &CropRecommendationRequest,
    ) -> Result<CropRecommendationResponse, AppError> {
        let artifacts = self.artifacts.as_ref().ok_or_else(|| {
            AppError::ModelUnavailable(
                "Crop recommendation model not available. Export the model artifacts first."
                    .to_string(),
            )
        })?;

        let features = [
            req.n,
            req.p,
            req.k,
            req.temperature,
            req.humidity,
            req.ph,
            req.rainfall,
        ];

        let probabilities = artifacts.model.predict_proba(&features).map_err(internal_error)?;
        if probabilities.len() != artifacts.encoder.len() {
            return Err(internal_error(format!(
                "recommendation model emitted {} probabilities for {} classes",
                probabilities.len(),
                artifacts.encoder.len()
            )));
        }

        let (best, confidence) = argmax(&probabilities)
            .ok_or_else(|| internal_error("recommendation model emitted no probabilities"))?;
        let recommended_crop = artifacts.encoder.classes()[best].clone();

        let crop_details = crop_facts::lookup(&recommended_crop)
            .map(CropDetails::from)
            .unwrap_or_else(|| CropDetails::generic(&recommended_crop));

        let message = format!(
            "Based on your soil and climate conditions, {} is highly recommended with {:.1}% confidence.",
            recommended_crop,
            confidence * 100.0
        );

        Ok(CropRecommendationResponse {
            recommended_crop,
            confidence,
            crop_details,
            soil_analysis: analyze_soil(req),
            alternative_crops: alternatives(&probabilities, artifacts.encoder.classes(), best),
            message,
        })
    }

    pub fn model_status(&self) -> Value {
        if self.model_loaded() {
            json!({
                "status": "operational",
                "model_loaded": true,
                "features": ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"],
                "message": "Crop recommendation model is ready"
            })
        } else {
            json!({
                "status": "unavailable",
                "model_loaded": false,
                "message": "Model not loaded. Export the recommendation model artifacts first."
            })
        }
    }
}

/// Static crop fact lookup, case-insensitive.
pub fn crop_info(crop_name: &str) -> Result<Value, AppError> {
    match crop_facts::lookup(crop_name) {
        Some(facts) => Ok(json!({
            "crop": crop_name,
            "details": CropDetails::from(facts),
        })),
        None => Err(AppError::NotFound(format!(
            "Crop '{}' not found. Available crops: {}",
            crop_name,
            crop_facts::keys().join(", ")
        ))),
    }
}

/// Basic info for every crop in the static table.
pub fn all_crops() -> Value {
    let crops: Vec<Value> = crop_facts::all()
        .map(|(key, facts)| {
            json!({
                "name": facts.name,
                "season": facts.season,
                "key": key,
            })
        })
        .collect();

    json!({
        "total_crops": crops.len(),
        "crops": crops,
    })
}

/// Runner-up classes by descending probability, best excluded.
fn alternatives(probabilities: &[f32], classes: &[String], best: usize) -> Vec<String> {
    let mut ranked: Vec<usize> = (0..probabilities.len()).collect();
    ranked.sort_by(|&a, &b| {
        probabilities[b]
            .partial_cmp(&probabilities[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
        .into_iter()
        .filter(|&i| i != best)
        .take(ALTERNATIVE_COUNT)
        .map(|i| classes[i].clone())
        .collect()
}

fn analyze_soil(req: &CropRecommendationRequest) -> SoilAnalysis {
    SoilAnalysis {
        nitrogen_level: nutrient_level(req.n, 100.0, 50.0),
        phosphorus_level: nutrient_level(req.p, 60.0, 30.0),
        potassium_level: nutrient_level(req.k, 60.0, 30.0),
        ph_status: if req.ph > 7.5 {
            "Alkaline"
        } else if req.ph > 6.5 {
            "Neutral"
        } else {
            "Acidic"
        },
        ph_suitability: if (6.0..=7.5).contains(&req.ph) {
            "Suitable"
        } else {
            "Needs adjustment"
        },
        moisture_level: if req.rainfall > 1500.0 {
            "High"
        } else if req.rainfall > 500.0 {
            "Medium"
        } else {
            "Low"
        },
    }
}

fn nutrient_level(value: f32, high: f32, medium: f32) -> &'static str {
    if value > high {
        "High"
    } else if value > medium {
        "Medium"
    } else {
        "Low"
    }
}
