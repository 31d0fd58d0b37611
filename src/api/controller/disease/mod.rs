//! Disease controller: multipart upload handling and static lookups

use axum::extract::{Multipart, Path, State};
use axum::Json;

use crate::api::dto::disease_dto::{DiseaseDetails, DiseaseDetectionResponse};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::disease::service as disease_service;
use crate::errors::AppError;

pub struct DiseaseController;

impl DiseaseController {
    pub async fn detect_disease(
        State(state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<ApiResponse<DiseaseDetectionResponse>>, AppError> {
        let mut upload = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?
        {
            if field.name() == Some("file") {
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
                upload = Some((content_type, bytes));
                break;
            }
        }

        let (content_type, bytes) = upload.ok_or_else(|| {
            AppError::BodyParsingError("Missing multipart field \"file\"".to_string())
        })?;

        if !content_type.is_some_and(|ct| ct.starts_with("image/")) {
            return Err(AppError::BodyParsingError("Invalid image file".to_string()));
        }

        to_json(state.disease_service.detect(&bytes))
    }

    pub async fn get_disease_info(
        Path(class_name): Path<String>,
    ) -> Result<Json<ApiResponse<DiseaseDetails>>, AppError> {
        to_json(disease_service::disease_details(&class_name))
    }
}
