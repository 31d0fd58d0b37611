//! Recommendation routes (e.g., /api/recommend-crop, /api/crop-info/*)

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::controller::recommendation::RecommendationController;
use crate::app_state::AppState;

pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recommend-crop",
            post(RecommendationController::recommend_crop),
        )
        .route(
            "/crop-info/{crop_name}",
            get(RecommendationController::get_crop_info),
        )
        .route("/all-crops", get(RecommendationController::get_all_crops))
        .route(
            "/model-status",
            get(RecommendationController::get_model_status),
        )
}
