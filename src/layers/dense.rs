use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Fully connected layer: `a = activation(x·W + b)`.
///
/// `weights` is `input_size × size` and `biases` is `1 × size`. Training-time
/// fields written by ferrite-nn (`neurons`, `pre_neurons`) are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    pub fn new(weights: Matrix, biases: Matrix, activator: ActivationFunction) -> Layer {
        Layer {
            size: weights.cols,
            weights,
            biases,
            activator,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// Describes the first shape inconsistency, if any.
    pub fn shape_problem(&self) -> Option<String> {
        if !self.weights.is_well_formed() {
            return Some("weights data does not match declared shape".into());
        }
        if self.weights.cols != self.size {
            return Some(format!("weights have {} columns, layer size is {}", self.weights.cols, self.size));
        }
        if !self.biases.is_well_formed() || self.biases.rows != 1 || self.biases.cols != self.size {
            return Some(format!(
                "biases are {}x{}, expected 1x{}",
                self.biases.rows, self.biases.cols, self.size
            ));
        }
        None
    }

    /// Inference-only forward pass. Shapes are validated when the network is loaded.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        let z: Vec<f64> = self.weights.left_mul(input)
            .into_iter()
            .zip(self.biases.first_row())
            .map(|(wx, b)| wx + b)
            .collect();
        self.activator.apply(&z)
    }
}
