//! Risk routes (e.g., /api/predict-risk, /api/crops)

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::controller::risk::RiskController;
use crate::app_state::AppState;

pub fn risk_routes() -> Router<AppState> {
    Router::new()
        .route("/predict-risk", post(RiskController::predict_risk))
        .route("/crops", get(RiskController::get_crops))
        .route("/states", get(RiskController::get_states))
        .route("/districts", get(RiskController::get_districts))
}
