pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod error;
pub mod canvas;
pub mod input;
pub mod normalize;
pub mod classify;
pub mod model;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::{Network, InputType, ModelMetadata};
pub use error::{ClassifyError, LoadError, SurfaceError};
pub use canvas::{CanvasConfig, DrawingSession, PenMode, PenState, Point, RasterSurface, Viewport};
pub use input::{InputEvent, PointerEvent};
pub use normalize::{normalize, ClassificationTensor};
pub use classify::{classify, Classifier, Prediction};
pub use model::{load_with_fallback, LoadOutcome, ModelState, ModelVariant};
