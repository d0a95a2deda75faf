use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageResult};
use ndarray::Array4;
use std::path::Path;

/// Spatial size the network was trained on.
pub const INPUT_SIZE: u32 = 224;

/// ImageNet channel means in BGR order, as used by ResNet50's caffe-style preprocessing.
pub const BGR_MEAN: [f32; 3] = [103.939, 116.779, 123.68];

/// Loads the image at `path` and turns it into a `(1, 224, 224, 3)` input batch.
///
/// The format is sniffed from the file contents, so the extension of the
/// temporary upload does not matter.
pub fn preprocess_image(path: &Path) -> ImageResult<Array4<f32>> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(preprocess(&img))
}

/// Resizes to 224x224 with nearest-neighbour sampling, swaps RGB to BGR and
/// subtracts the per-channel mean. Layout is NHWC.
pub fn preprocess(img: &DynamicImage) -> Array4<f32> {
    let resized = img
        .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Nearest)
        .to_rgb8();

    let size = INPUT_SIZE as usize;
    let mut tensor = Array4::zeros((1, size, size, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            // output channel c reads input channel 2 - c
            tensor[[0, y as usize, x as usize, c]] = pixel[2 - c] as f32 - BGR_MEAN[c];
        }
    }

    tensor
}
