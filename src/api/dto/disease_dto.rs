//! Disease detection API DTOs

use serde::Serialize;

use crate::core::catalog::disease_info::DiseaseInfo;

#[derive(Debug, Serialize)]
pub struct DiseaseDetectionResponse {
    /// Raw class label, e.g. `Potato___Late_blight`.
    pub disease: String,
    /// Formatted percentage, e.g. `"97.41%"`.
    pub confidence: String,
    pub info: DiseaseDetails,
}

#[derive(Debug, Serialize)]
pub struct DiseaseDetails {
    pub name: String,
    pub description: String,
    pub treatment: Vec<String>,
}

impl From<&DiseaseInfo> for DiseaseDetails {
    fn from(info: &DiseaseInfo) -> Self {
        Self {
            name: info.name.to_string(),
            description: info.description.to_string(),
            treatment: info.treatment.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}
