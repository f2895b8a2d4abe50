//! Raster surface → classifier input.
//!
//! The classifier was trained on light-on-dark 28×28 single-channel images,
//! so the surface is downsampled, averaged to gray, scaled to [0, 1] and then
//! inverted: ink ends up near 1.0 and background at 0.0.

use image::imageops::{self, FilterType};

use crate::canvas::surface::RasterSurface;

pub const TENSOR_SIDE: usize = 28;
pub const TENSOR_LEN: usize = TENSOR_SIDE * TENSOR_SIDE;
/// Logical shape: batch, height, width, channel.
pub const TENSOR_SHAPE: [usize; 4] = [1, TENSOR_SIDE, TENSOR_SIDE, 1];

/// Immutable `[1, 28, 28, 1]` tensor, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationTensor {
    data: Vec<f32>,
}

impl ClassificationTensor {
    /// The tensor of an untouched surface: all zeros.
    pub fn blank() -> ClassificationTensor {
        ClassificationTensor { data: vec![0.0; TENSOR_LEN] }
    }

    pub fn shape(&self) -> [usize; 4] {
        TENSOR_SHAPE
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * TENSOR_SIDE + col]
    }

    /// Flattened copy widened to `f64` for the network.
    pub fn to_input(&self) -> Vec<f64> {
        self.data.iter().map(|&v| v as f64).collect()
    }
}

/// Converts the surface into a classification tensor.
///
/// Steps: bilinear resize to 28×28, gray = mean(R, G, B), `/ 255`, `1 - v`.
/// Alpha is ignored; the surface is always opaque.
pub fn normalize(surface: &RasterSurface) -> ClassificationTensor {
    let side = TENSOR_SIDE as u32;
    let small = imageops::resize(surface.as_image(), side, side, FilterType::Triangle);

    let data = small.pixels()
        .map(|p| {
            let [r, g, b, _] = p.0;
            let gray = (r as f32 + g as f32 + b as f32) / 3.0;
            1.0 - gray / 255.0
        })
        .collect();

    ClassificationTensor { data }
}
