//! System controller: service metadata endpoints

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::system::service as system_service;
use crate::errors::AppError;

pub struct SystemController;

impl SystemController {
    pub async fn welcome() -> Json<Value> {
        Json(system_service::welcome())
    }

    pub async fn health(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(Ok(system_service::health(
            state.risk_service.model_loaded(),
            state.recommendation_service.model_loaded(),
            state.disease_service.model_loaded(),
        )))
    }

    pub async fn api_info(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(Ok(system_service::api_info(
            state.risk_service.crops().len(),
            state.risk_service.states().len(),
            state.risk_service.districts().len(),
        )))
    }
}
