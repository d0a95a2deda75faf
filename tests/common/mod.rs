#![allow(dead_code)]

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use ndarray::Array4;
use skin_classifier::classifier::{Classifier, ModelError};
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

pub const BOUNDARY: &str = "----skin-classifier-test-boundary";

/// One part of a multipart/form-data body.
pub struct Part<'a> {
    pub disposition: String,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

impl<'a> Part<'a> {
    pub fn file(name: &str, filename: &str, data: &'a [u8]) -> Self {
        Self {
            disposition: format!("form-data; name=\"{name}\"; filename=\"{filename}\""),
            content_type: "application/octet-stream",
            data,
        }
    }

    /// A file part whose disposition carries no filename at all.
    pub fn unnamed_file(name: &str, data: &'a [u8]) -> Self {
        Self {
            disposition: format!("form-data; name=\"{name}\""),
            content_type: "application/octet-stream",
            data,
        }
    }

    pub fn text(name: &str, value: &'a str) -> Self {
        Self {
            disposition: format!("form-data; name=\"{name}\""),
            content_type: "text/plain",
            data: value.as_bytes(),
        }
    }
}

/// Returns the content type header value and the encoded body.
pub fn multipart(parts: &[Part<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(format!("Content-Disposition: {}\r\n", part.disposition).as_bytes());
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", part.content_type).as_bytes());
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub fn png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .unwrap();
    bytes
}

pub fn entries(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

/// Always returns the same scores.
pub struct FixedScores(pub Vec<f32>);

impl Classifier for FixedScores {
    fn predict(&self, batch: Array4<f32>) -> Result<Vec<f32>, ModelError> {
        assert_eq!(batch.shape(), &[1, 224, 224, 3]);
        Ok(self.0.clone())
    }
}

/// Scores with a single peak at `index`.
pub fn peak_at(index: usize, len: usize) -> FixedScores {
    let mut scores = vec![0.0; len];
    scores[index] = 8.0;
    FixedScores(scores)
}

pub struct Failing;

impl Classifier for Failing {
    fn predict(&self, _batch: Array4<f32>) -> Result<Vec<f32>, ModelError> {
        Err(ModelError::Inference("tensor shape mismatch".to_string()))
    }
}

/// Predicts Chickenpox for bluish images and Monkeypox otherwise, slowly
/// enough that overlapping requests are actually in flight together.
pub struct ByBlueChannel;

impl Classifier for ByBlueChannel {
    fn predict(&self, batch: Array4<f32>) -> Result<Vec<f32>, ModelError> {
        std::thread::sleep(Duration::from_millis(100));
        let blue = batch.slice(ndarray::s![0, .., .., 0]).mean().unwrap_or(0.0);
        Ok(if blue > 0.0 {
            vec![5.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        } else {
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 5.0]
        })
    }
}
