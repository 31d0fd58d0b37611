//! Recommendation controller: connects routes to the recommendation usecases

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use validator::Validate;

use crate::api::dto::recommendation_dto::{CropRecommendationRequest, CropRecommendationResponse};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::recommendation::service as recommendation_service;
use crate::errors::AppError;

pub struct RecommendationController;

impl RecommendationController {
    pub async fn recommend_crop(
        State(state): State<AppState>,
        Json(payload): Json<CropRecommendationRequest>,
    ) -> Result<Json<ApiResponse<CropRecommendationResponse>>, AppError> {
        payload.validate()?;
        to_json(state.recommendation_service.recommend(&payload))
    }

    pub async fn get_crop_info(
        Path(crop_name): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(recommendation_service::crop_info(&crop_name))
    }

    pub async fn get_all_crops() -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(Ok(recommendation_service::all_crops()))
    }

    pub async fn get_model_status(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(Ok(state.recommendation_service.model_status()))
    }
}
