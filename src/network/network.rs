use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::classify::Classifier;
use crate::error::{ClassifyError, LoadError};
use crate::layers::dense::Layer;
use crate::network::metadata::{InputType, ModelMetadata};
use crate::normalize::tensor::{ClassificationTensor, TENSOR_LEN, TENSOR_SIDE};

/// A feed-forward network in ferrite-nn's JSON model format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl Network {
    pub fn new(layers: Vec<Layer>) -> Network {
        Network { layers, metadata: None }
    }

    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Network {
        self.metadata = Some(metadata);
        self
    }

    /// Fan-in of the first layer (0 for an empty network).
    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, |l| l.input_size())
    }

    /// Number of classes produced by the last layer.
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |l| l.size)
    }

    /// Forward pass through every layer.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current);
        }
        current
    }

    /// Checks that the layers chain together, the first layer takes a full
    /// 28×28 tensor and the declared input format (when present) is grayscale.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.layers.is_empty() {
            return Err(LoadError::Empty);
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if let Some(detail) = layer.shape_problem() {
                return Err(LoadError::Shape { layer: i, detail });
            }
            if i > 0 && layer.input_size() != self.layers[i - 1].size {
                return Err(LoadError::Shape {
                    layer: i,
                    detail: format!(
                        "expects {} inputs, previous layer produces {}",
                        layer.input_size(),
                        self.layers[i - 1].size
                    ),
                });
            }
        }

        if self.input_size() != TENSOR_LEN {
            return Err(LoadError::IncompatibleInput(format!(
                "first layer takes {} inputs, expected {}",
                self.input_size(),
                TENSOR_LEN
            )));
        }

        let side = TENSOR_SIDE as u32;
        match self.metadata.as_ref().and_then(|m| m.input_type.as_ref()) {
            Some(InputType::ImageGrayscale { width, height }) if (*width, *height) != (side, side) => {
                Err(LoadError::IncompatibleInput(format!("grayscale {}x{}", width, height)))
            }
            Some(InputType::ImageRgb { .. }) => {
                Err(LoadError::IncompatibleInput("rgb image input".into()))
            }
            _ => Ok(()),
        }
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a network from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Network, LoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)?;
        network.validate()?;
        debug!(path = %path.display(), layers = network.layers.len(), classes = network.output_size(), "model parsed");
        Ok(network)
    }
}

impl Classifier for Network {
    fn predict(&self, tensor: &ClassificationTensor) -> Result<Vec<f64>, ClassifyError> {
        let input = tensor.to_input();
        if input.len() != self.input_size() {
            return Err(ClassifyError::InputMismatch {
                expected: self.input_size(),
                actual: input.len(),
            });
        }
        Ok(self.forward(&input))
    }

    fn label(&self, index: usize) -> String {
        self.metadata.as_ref()
            .and_then(|m| m.output_labels.as_ref())
            .and_then(|labels| labels.get(index))
            .cloned()
            .unwrap_or_else(|| index.to_string())
    }
}
