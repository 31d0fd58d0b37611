use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::api::controller::system::SystemController;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Risk, Recommendation, Disease and System route groups share /api
    let api = Router::new()
        .merge(crate::api::routes::risk_routes::risk_routes())
        .merge(crate::api::routes::recommendation_routes::recommendation_routes())
        .merge(crate::api::routes::disease_routes::disease_routes())
        .merge(crate::api::routes::system_routes::system_routes());

    Router::new()
        // Root route
        .route("/", get(SystemController::welcome))
        // API
        .nest("/api", api)
        // Fallback handler for 404
        .fallback(handler_404)
        // CORS applies to all routes
        .layer(CorsLayer::very_permissive())
}

// Handler for 404 Not Found
async fn handler_404(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "message": format!("The endpoint {} does not exist", uri.path()),
            "available_endpoints": [
                "/",
                "/api/health",
                "/api/info",
                "/api/predict-risk",
                "/api/crops",
                "/api/states",
                "/api/districts",
                "/api/recommend-crop",
                "/api/crop-info/{crop_name}",
                "/api/all-crops",
                "/api/model-status",
                "/api/detect-disease",
                "/api/disease-info/{class_name}",
            ],
        })),
    )
}
