//! Service metadata documents: welcome page, health check, API info.

use chrono::Utc;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "AgriShield Risk Prediction API";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn welcome() -> Value {
    json!({
        "message": "Welcome to AgriShield API",
        "description": "Crop Failure Risk Prediction System",
        "version": VERSION,
        "status": "active",
        "endpoints": {
            "prediction": "POST /api/predict-risk",
            "recommendation": "POST /api/recommend-crop",
            "disease_detection": "POST /api/detect-disease",
            "health": "GET /api/health",
            "crops": "GET /api/crops",
            "states": "GET /api/states",
            "districts": "GET /api/districts",
        }
    })
}

/// Liveness document. `model_loaded` mirrors the risk model for clients
/// that predate the per-group breakdown.
pub fn health(risk_loaded: bool, recommendation_loaded: bool, disease_loaded: bool) -> Value {
    json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": VERSION,
        "model_loaded": risk_loaded,
        "models": {
            "crop_failure": risk_loaded,
            "recommendation": recommendation_loaded,
            "disease": disease_loaded,
        },
        "timestamp": Utc::now().to_rfc3339(),
    })
}

pub fn api_info(
    supported_crops: usize,
    supported_states: usize,
    supported_districts: usize,
) -> Value {
    json!({
        "api_name": "AgriShield Crop Failure Risk Prediction API",
        "version": VERSION,
        "description": "AI-powered crop failure risk assessment system",
        "features": [
            "Crop failure risk prediction",
            "Crop recommendation",
            "Plant disease detection",
            "Multi-crop support",
            "State and district level predictions",
            "Weather-based risk assessment",
            "Disaster impact analysis",
            "Actionable recommendations",
        ],
        "technology": {
            "framework": "axum",
            "inference": "onnxruntime",
            "model_type": "Classification",
        },
        "data_sources": [
            "Government crop production data",
            "Historical weather data",
            "Disaster records",
            "Soil quality data",
        ],
        "supported_crops": supported_crops,
        "supported_states": supported_states,
        "supported_districts": supported_districts,
    })
}
