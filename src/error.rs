//! Error types shared by the library. Every failure is terminal to the
//! operation that raised it; none of them touch the drawing surface.

use thiserror::Error;

/// Reading or validating a model file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid model json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("model has no layers")]
    Empty,

    /// A layer's matrices disagree with each other or with the previous layer.
    #[error("layer {layer}: {detail}")]
    Shape { layer: usize, detail: String },

    /// The model declares an input format other than 28x28 grayscale.
    #[error("incompatible input: {0}")]
    IncompatibleInput(String),
}

/// Classification request failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    /// The background load has not finished yet. Recoverable.
    #[error("Model not loaded yet")]
    NotReady,

    /// Both model variants failed to load; permanent until restart.
    #[error("Failed to load the model: {0}")]
    Unavailable(String),

    #[error("classifier expects {expected} inputs, tensor has {actual}")]
    InputMismatch { expected: usize, actual: usize },

    #[error("classifier returned no probabilities")]
    EmptyOutput,
}

/// Rendering the raster surface for display.
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
