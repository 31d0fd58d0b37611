//! Disease routes (e.g., /api/detect-disease)

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::controller::disease::DiseaseController;
use crate::app_state::AppState;

pub fn disease_routes() -> Router<AppState> {
    Router::new()
        .route("/detect-disease", post(DiseaseController::detect_disease))
        .route(
            "/disease-info/{class_name}",
            get(DiseaseController::get_disease_info),
        )
}
