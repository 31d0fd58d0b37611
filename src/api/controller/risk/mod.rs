//! Risk controller: connects routes to the failure-risk usecases

use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};
use validator::Validate;

use crate::api::dto::risk_dto::{DistrictListQuery, RiskPredictionRequest, RiskPredictionResponse};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

const DEFAULT_DISTRICT_LIMIT: usize = 100;

pub struct RiskController;

impl RiskController {
    pub async fn predict_risk(
        State(state): State<AppState>,
        Json(payload): Json<RiskPredictionRequest>,
    ) -> Result<Json<ApiResponse<RiskPredictionResponse>>, AppError> {
        payload.validate()?;
        to_json(state.risk_service.predict(&payload))
    }

    pub async fn get_crops(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        let crops = state.risk_service.crops();
        to_json(Ok(json!({
            "crops": crops,
            "count": crops.len(),
            "message": "Available crops for prediction",
        })))
    }

    pub async fn get_states(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        let states = state.risk_service.states();
        to_json(Ok(json!({
            "states": states,
            "count": states.len(),
            "message": "Available states for prediction",
        })))
    }

    pub async fn get_districts(
        State(state): State<AppState>,
        Query(query): Query<DistrictListQuery>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        let districts = state.risk_service.districts();
        let limit = query.limit.unwrap_or(DEFAULT_DISTRICT_LIMIT);
        let showing = limit.min(districts.len());

        to_json(Ok(json!({
            "districts": &districts[..showing],
            "total_count": districts.len(),
            "showing": showing,
            "message": "Available districts for prediction",
        })))
    }
}
