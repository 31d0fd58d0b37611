//! Plant-disease detection from uploaded leaf images.

use crate::api::dto::disease_dto::{DiseaseDetails, DiseaseDetectionResponse};
use crate::core::catalog::disease_info;
use crate::core::model::tabular::argmax;
use crate::core::model::vision::{preprocess, ImageClassifier};
use crate::errors::{internal_error, AppError};

pub struct DiseaseService {
    classifier: Option<Box<dyn ImageClassifier>>,
}

impl DiseaseService {
    pub fn new(classifier: Option<Box<dyn ImageClassifier>>) -> Self {
        Self { classifier }
    }

    pub fn model_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    /// Classify an uploaded image. The bytes are whatever the client sent;
    /// anything the image decoder rejects is a client error.
    pub fn detect(&self, upload: &[u8]) -> Result<DiseaseDetectionResponse, AppError> {
        let classifier = self.classifier.as_ref().ok_or_else(|| {
            AppError::ModelUnavailable(
                "Disease detection model not available. Export the model artifacts first."
                    .to_string(),
            )
        })?;

        let image = image::load_from_memory(upload)
            .map_err(|e| AppError::BodyParsingError(format!("Invalid image file: {e}")))?;

        let leaf = preprocess(&image);
        let probabilities = classifier.predict_proba(&leaf).map_err(internal_error)?;

        let (index, confidence) = argmax(&probabilities)
            .ok_or_else(|| internal_error("disease model emitted no probabilities"))?;
        let class = disease_info::class_name(index).ok_or_else(|| {
            internal_error(format!("disease model emitted unknown class index {index}"))
        })?;

        let info = disease_info::lookup(class)
            .ok_or_else(|| internal_error(format!("no description entry for class {class}")))?;

        Ok(DiseaseDetectionResponse {
            disease: class.to_string(),
            confidence: format!("{:.2}%", confidence * 100.0),
            info: DiseaseDetails::from(info),
        })
    }
}

/// Static disease description lookup, case-insensitive on the class label.
pub fn disease_details(class: &str) -> Result<DiseaseDetails, AppError> {
    disease_info::lookup(class)
        .map(DiseaseDetails::from)
        .ok_or_else(|| AppError::NotFound(format!("Disease class '{class}' not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::vision::LeafImage;
    use image::{DynamicImage, RgbImage};
    use std::io::Cursor;

    struct MockClassifier {
        probabilities: Vec<f32>,
    }

    impl ImageClassifier for MockClassifier {
        fn predict_proba(&self, _image: &LeafImage) -> anyhow::Result<Vec<f32>> {
            Ok(self.probabilities.clone())
        }
    }

    fn png_bytes() -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(32, 32));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn service(probabilities: Vec<f32>) -> DiseaseService {
        DiseaseService::new(Some(Box::new(MockClassifier { probabilities })))
    }

    #[test]
    fn detect_reports_argmax_class_with_formatted_confidence() {
        let mut probabilities = vec![0.01; 15];
        probabilities[4] = 0.86; // Potato___Late_blight

        let response = service(probabilities).detect(&png_bytes()).unwrap();
        assert_eq!(response.disease, "Potato___Late_blight");
        assert_eq!(response.confidence, "86.00%");
        assert_eq!(response.info.name, "Potato Late Blight");
    }

    #[test]
    fn undecodable_upload_is_a_client_error() {
        let result = service(vec![0.1; 15]).detect(b"definitely not an image");
        assert!(matches!(result, Err(AppError::BodyParsingError(_))));
    }

    #[test]
    fn missing_model_reports_unavailable() {
        let service = DiseaseService::new(None);
        assert!(matches!(
            service.detect(&png_bytes()),
            Err(AppError::ModelUnavailable(_))
        ));
    }

    #[test]
    fn disease_details_resolves_and_404s() {
        let details = disease_details("Tomato_Leaf_Mold").unwrap();
        assert_eq!(details.name, "Tomato Leaf Mold");
        assert!(matches!(
            disease_details("Cabbage_Rust"),
            Err(AppError::NotFound(_))
        ));
    }
}
