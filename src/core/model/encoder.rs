//! Label encoder backed by the ordered class list exported alongside the
//! trained model. Transforming a label is an index lookup into that list.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Encoded value for a label, `None` when the label was not seen in
    /// training. Matching is exact, as in the training encoder.
    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        LabelEncoder::new(vec![
            "Cotton".to_string(),
            "Rice".to_string(),
            "Wheat".to_string(),
        ])
    }

    #[test]
    fn transform_is_positional() {
        let enc = encoder();
        assert_eq!(enc.transform("Cotton"), Some(0));
        assert_eq!(enc.transform("Wheat"), Some(2));
    }

    #[test]
    fn transform_is_exact_match() {
        let enc = encoder();
        assert_eq!(enc.transform("rice"), None);
        assert_eq!(enc.transform("Barley"), None);
    }

    #[test]
    fn deserializes_from_sidecar_shape() {
        let enc: LabelEncoder =
            serde_json::from_str(r#"{"classes": ["Kharif", "Rabi"]}"#).unwrap();
        assert_eq!(enc.len(), 2);
        assert_eq!(enc.transform("Rabi"), Some(1));
    }
}
