//! Failure-risk API DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inputs for a failure-risk prediction.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RiskPredictionRequest {
    /// Crop name, e.g. `Rice`, `Wheat`, `Cotton`.
    #[validate(length(min = 1))]
    pub crop: String,

    #[validate(length(min = 1))]
    pub state: String,

    #[validate(length(min = 1))]
    pub district: String,

    /// Growing season: `Kharif`, `Rabi`, `Summer`, `Whole Year`, ...
    #[validate(length(min = 1))]
    pub season: String,

    /// Average temperature in °C.
    #[validate(range(min = -10.0, max = 50.0))]
    pub temperature: f32,

    /// Total expected rainfall in mm.
    #[validate(range(min = 0.0, max = 5000.0))]
    pub rainfall: f32,

    /// Average humidity percentage.
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f32,

    /// 0 = no disaster, 1 = disaster occurred in the region.
    #[serde(default)]
    #[validate(range(min = 0, max = 1))]
    pub disaster_occurred: u8,
}

#[derive(Debug, Serialize)]
pub struct RiskPredictionResponse {
    /// Risk score percentage (0-100).
    pub risk_score: f32,
    /// `Low`, `Medium` or `High`.
    pub risk_level: &'static str,
    /// UI color code: `green`, `orange`, `red`.
    pub color: &'static str,
    pub explanation: String,
    pub recommendations: Vec<String>,
    pub district_info: DistrictInfoDto,
}

#[derive(Debug, Serialize)]
pub struct DistrictInfoDto {
    pub soil_type: String,
    pub soil_quality: f32,
    pub state: String,
    pub district: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DistrictListQuery {
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(temperature: f32, rainfall: f32, humidity: f32) -> RiskPredictionRequest {
        serde_json::from_value(json!({
            "crop": "Rice",
            "state": "Punjab",
            "district": "Ludhiana",
            "season": "Kharif",
            "temperature": temperature,
            "rainfall": rainfall,
            "humidity": humidity,
            "disaster_occurred": 0
        }))
        .unwrap()
    }

    #[test]
    fn in_range_request_passes_validation() {
        assert!(request(28.0, 1200.0, 75.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        assert!(request(-20.0, 1200.0, 75.0).validate().is_err());
        assert!(request(28.0, 6000.0, 75.0).validate().is_err());
        assert!(request(28.0, 1200.0, 120.0).validate().is_err());
    }

    #[test]
    fn disaster_flag_defaults_to_zero() {
        let req: RiskPredictionRequest = serde_json::from_value(json!({
            "crop": "Rice",
            "state": "Punjab",
            "district": "Ludhiana",
            "season": "Kharif",
            "temperature": 28.0,
            "rainfall": 1200.0,
            "humidity": 75.0
        }))
        .unwrap();
        assert_eq!(req.disaster_occurred, 0);
    }
}
