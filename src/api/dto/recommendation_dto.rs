//! Crop recommendation API DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::catalog::crop_facts::CropFacts;

/// Soil and climate measurements for a recommendation.
///
/// Field names on the wire keep the training dataset's `N`/`P`/`K` columns.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CropRecommendationRequest {
    /// Nitrogen content (kg/ha).
    #[serde(rename = "N")]
    #[validate(range(min = 0.0, max = 200.0))]
    pub n: f32,

    /// Phosphorus content (kg/ha).
    #[serde(rename = "P")]
    #[validate(range(min = 0.0, max = 200.0))]
    pub p: f32,

    /// Potassium content (kg/ha).
    #[serde(rename = "K")]
    #[validate(range(min = 0.0, max = 200.0))]
    pub k: f32,

    /// Temperature (°C).
    #[validate(range(min = 0.0, max = 50.0))]
    pub temperature: f32,

    /// Humidity (%).
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f32,

    /// Soil pH.
    #[validate(range(min = 0.0, max = 14.0))]
    pub ph: f32,

    /// Rainfall (mm).
    #[validate(range(min = 0.0, max = 3000.0))]
    pub rainfall: f32,
}

#[derive(Debug, Serialize)]
pub struct CropRecommendationResponse {
    pub recommended_crop: String,
    /// Model confidence (0-1).
    pub confidence: f32,
    pub crop_details: CropDetails,
    pub soil_analysis: SoilAnalysis,
    pub alternative_crops: Vec<String>,
    pub message: String,
}

/// Detailed information about a recommended crop.
#[derive(Debug, Serialize)]
pub struct CropDetails {
    pub name: String,
    pub season: String,
    pub ideal_temp: String,
    pub ideal_rainfall: String,
    pub soil_type: String,
    pub growth_period: String,
    pub tips: Vec<String>,
}

impl CropDetails {
    /// Fallback entry for crops the static table does not cover.
    pub fn generic(name: &str) -> Self {
        Self {
            name: name.to_string(),
            season: "Varies".to_string(),
            ideal_temp: "Check local agricultural guidelines".to_string(),
            ideal_rainfall: "Check local agricultural guidelines".to_string(),
            soil_type: "Suitable soil required".to_string(),
            growth_period: "Varies".to_string(),
            tips: vec!["Consult local agricultural extension officer".to_string()],
        }
    }
}

impl From<&CropFacts> for CropDetails {
    fn from(facts: &CropFacts) -> Self {
        Self {
            name: facts.name.to_string(),
            season: facts.season.to_string(),
            ideal_temp: facts.ideal_temp.to_string(),
            ideal_rainfall: facts.ideal_rainfall.to_string(),
            soil_type: facts.soil_type.to_string(),
            growth_period: facts.growth_period.to_string(),
            tips: facts.tips.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

/// Rule-based interpretation of the measured soil values.
#[derive(Debug, Serialize)]
pub struct SoilAnalysis {
    pub nitrogen_level: &'static str,
    pub phosphorus_level: &'static str,
    pub potassium_level: &'static str,
    pub ph_status: &'static str,
    pub ph_suitability: &'static str,
    pub moisture_level: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_are_uppercase_npk() {
        let req: CropRecommendationRequest = serde_json::from_value(json!({
            "N": 90, "P": 42, "K": 43,
            "temperature": 20.8, "humidity": 82.0, "ph": 6.5, "rainfall": 202.9
        }))
        .unwrap();
        assert_eq!(req.n, 90.0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn ph_outside_scale_is_rejected() {
        let req: CropRecommendationRequest = serde_json::from_value(json!({
            "N": 90, "P": 42, "K": 43,
            "temperature": 20.8, "humidity": 82.0, "ph": 14.5, "rainfall": 202.9
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }
}
