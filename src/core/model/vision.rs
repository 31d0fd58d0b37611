//! Leaf-image preprocessing and CNN inference.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use image::{imageops::FilterType, DynamicImage};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;

use super::tabular::extract_probabilities;

/// Input edge length the disease CNN was trained on.
pub const IMAGE_SIZE: u32 = 128;

/// Image resized and normalized into the NHWC layout the CNN expects.
pub struct LeafImage {
    pixels: Vec<f32>,
    height: usize,
    width: usize,
}

impl LeafImage {
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }
}

/// Resize to the model input size and scale channels to `[0, 1]`.
pub fn preprocess(image: &DynamicImage) -> LeafImage {
    let resized = image.resize_exact(IMAGE_SIZE, IMAGE_SIZE, FilterType::Triangle);
    let rgb = resized.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for pixel in rgb.pixels() {
        pixels.push(f32::from(pixel[0]) / 255.0);
        pixels.push(f32::from(pixel[1]) / 255.0);
        pixels.push(f32::from(pixel[2]) / 255.0);
    }

    LeafImage {
        pixels,
        height: height as usize,
        width: width as usize,
    }
}

/// Image classifier exposing class probabilities for one preprocessed image.
pub trait ImageClassifier: Send + Sync {
    fn predict_proba(&self, image: &LeafImage) -> Result<Vec<f32>>;
}

pub struct OnnxImageClassifier {
    session: Mutex<Session>,
}

impl OnnxImageClassifier {
    pub fn load(model_path: &Path) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model {}", model_path.display()))?;

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl ImageClassifier for OnnxImageClassifier {
    fn predict_proba(&self, image: &LeafImage) -> Result<Vec<f32>> {
        let input = Tensor::from_array((
            [1usize, image.height, image.width, 3usize],
            image.pixels().to_vec(),
        ))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow!("inference session mutex poisoned"))?;
        let outputs = session.run(ort::inputs![input])?;
        extract_probabilities(&outputs)
    }
}
