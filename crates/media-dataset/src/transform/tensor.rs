use image::DynamicImage;
use thiserror::Error;

use super::Transform;
use crate::TransformError;

/// Image as a dense `f32` array laid out channels first, `[channels, height, width]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    /// Values in row-major `[C, H, W]` order.
    pub data: Vec<f32>,

    /// Dimensions as `[channels, height, width]`.
    pub shape: [usize; 3],
}

impl ImageTensor {
    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.shape[0]
    }

    /// Values of a single channel.
    pub fn channel(&self, index: usize) -> &[f32] {
        let [_, height, width] = self.shape;
        let plane = height * width;
        &self.data[index * plane..(index + 1) * plane]
    }
}

/// Error raised by the tensor transforms.
#[derive(Error, Debug, PartialEq)]
pub enum TensorTransformError {
    /// Per-channel statistics do not match the tensor.
    #[error("Expected {expected} channel statistics, tensor has {actual} channels")]
    ChannelMismatch {
        /// Number of channels in the tensor.
        actual: usize,
        /// Number of statistics provided.
        expected: usize,
    },

    /// A standard deviation of zero would divide by zero.
    #[error("Standard deviation of channel {0} is zero")]
    ZeroStd(usize),
}

/// Converts a decoded image into an [ImageTensor] with values scaled to `[0, 1]`.
///
/// The number of channels follows the image color type: gray (1), gray with alpha (2), RGB (3)
/// or RGBA (4). Pixel values are moved from interleaved `[H, W, C]` to `[C, H, W]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToTensor;

impl Transform<DynamicImage, ImageTensor> for ToTensor {
    fn apply(&self, image: DynamicImage) -> Result<ImageTensor, TransformError> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let channels = image.color().channel_count() as usize;

        let interleaved = match channels {
            1 => image.to_luma32f().into_raw(),
            2 => image.to_luma_alpha32f().into_raw(),
            3 => image.to_rgb32f().into_raw(),
            _ => image.to_rgba32f().into_raw(),
        };
        let plane = width * height;
        let mut data = vec![0f32; interleaved.len()];
        for (i, value) in interleaved.into_iter().enumerate() {
            let (pixel, channel) = (i / channels, i % channels);
            data[channel * plane + pixel] = value;
        }

        Ok(ImageTensor {
            data,
            shape: [channels, height, width],
        })
    }
}

/// Normalizes each channel with `(x - mean[c]) / std[c]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalize {
    mean: Vec<f32>,
    std: Vec<f32>,
}

impl Normalize {
    /// Creates a new normalization from per-channel mean and standard deviation.
    pub fn new(mean: &[f32], std: &[f32]) -> Self {
        Self {
            mean: mean.to_vec(),
            std: std.to_vec(),
        }
    }

    fn check(&self, tensor: &ImageTensor) -> Result<(), TensorTransformError> {
        let actual = tensor.channels();
        for expected in [self.mean.len(), self.std.len()] {
            if expected != actual {
                return Err(TensorTransformError::ChannelMismatch { actual, expected });
            }
        }
        match self.std.iter().position(|&std| std == 0.0) {
            Some(channel) => Err(TensorTransformError::ZeroStd(channel)),
            None => Ok(()),
        }
    }
}

impl Transform<ImageTensor, ImageTensor> for Normalize {
    fn apply(&self, mut tensor: ImageTensor) -> Result<ImageTensor, TransformError> {
        self.check(&tensor)?;

        let [_, height, width] = tensor.shape;
        let plane = height * width;
        if plane == 0 {
            return Ok(tensor);
        }
        for (channel, values) in tensor.data.chunks_mut(plane).enumerate() {
            let (mean, std) = (self.mean[channel], self.std[channel]);
            values.iter_mut().for_each(|x| *x = (*x - mean) / std);
        }

        Ok(tensor)
    }
}
