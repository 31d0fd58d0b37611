//! API DTOs shared across controllers.

pub mod disease_dto;
pub mod recommendation_dto;
pub mod risk_dto;

use serde::Serialize;

/// Success envelope every 2xx body is wrapped in.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
