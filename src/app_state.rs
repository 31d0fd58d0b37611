use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::model::artifacts;
use crate::domain::disease::service::DiseaseService;
use crate::domain::recommendation::service::RecommendationService;
use crate::domain::risk::service::RiskService;

/// Shared, read-only application state. Models are loaded exactly once
/// here; request handlers only ever borrow them.
#[derive(Clone)]
pub struct AppState {
    pub risk_service: Arc<RiskService>,
    pub recommendation_service: Arc<RecommendationService>,
    pub disease_service: Arc<DiseaseService>,
}

/// Load every model group from the configured artifact directory.
///
/// A group that fails to load is logged and disabled; its endpoints answer
/// 503 while the rest of the API stays up.
pub fn build_app_state(config: &AppConfig) -> AppState {
    let model_root = config.model_dir.as_path();

    let risk = match artifacts::load_risk_artifacts(model_root) {
        Ok(loaded) => {
            info!(
                crops = loaded.crop_encoder.len(),
                states = loaded.state_encoder.len(),
                districts = loaded.districts.len(),
                "Crop failure model loaded"
            );
            Some(loaded)
        }
        Err(e) => {
            warn!(error = %e, "Crop failure model group failed to load");
            None
        }
    };

    let recommendation = match artifacts::load_recommendation_artifacts(model_root) {
        Ok(loaded) => {
            info!(classes = loaded.encoder.len(), "Crop recommendation model loaded");
            Some(loaded)
        }
        Err(e) => {
            warn!(error = %e, "Crop recommendation model group failed to load");
            None
        }
    };

    let disease = match artifacts::load_disease_classifier(model_root) {
        Ok(loaded) => {
            info!("Disease detection model loaded");
            Some(loaded)
        }
        Err(e) => {
            warn!(error = %e, "Disease detection model failed to load");
            None
        }
    };

    AppState {
        risk_service: Arc::new(RiskService::new(risk)),
        recommendation_service: Arc::new(RecommendationService::new(recommendation)),
        disease_service: Arc::new(DiseaseService::new(disease)),
    }
}
