pub mod classifier;
pub mod prediction;

pub use classifier::{classify, Classifier};
pub use prediction::{argmax, Prediction};
