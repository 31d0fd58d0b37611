//! System routes (e.g., /api/health, /api/info)

use axum::{routing::get, Router};

use crate::api::controller::system::SystemController;
use crate::app_state::AppState;

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(SystemController::health))
        .route("/info", get(SystemController::api_info))
}
