use tracing::{debug, warn};

use crate::classify::prediction::{argmax, Prediction};
use crate::error::ClassifyError;
use crate::model::state::ModelState;
use crate::normalize::tensor::ClassificationTensor;

/// A pretrained model mapping a `[1, 28, 28, 1]` tensor to class probabilities.
pub trait Classifier {
    fn predict(&self, tensor: &ClassificationTensor) -> Result<Vec<f64>, ClassifyError>;

    /// Display label for a class index.
    fn label(&self, index: usize) -> String {
        index.to_string()
    }
}

/// Runs one classification against the loaded model.
///
/// Readiness is checked before `prepare` is called, so a request that arrives
/// while the model is loading never builds a tensor. The tensor lives only
/// for the duration of this call and is dropped on every return path.
pub fn classify<F>(model: &ModelState, prepare: F) -> Result<Prediction, ClassifyError>
where
    F: FnOnce() -> ClassificationTensor,
{
    let classifier = model.classifier()?;
    let tensor = prepare();
    predict_with(classifier, &tensor)
}

/// Predicts with an already-available classifier.
pub fn predict_with(
    classifier: &dyn Classifier,
    tensor: &ClassificationTensor,
) -> Result<Prediction, ClassifyError> {
    let probabilities = classifier.predict(tensor)?;
    let (index, max) = argmax(&probabilities).ok_or_else(|| {
        warn!(len = probabilities.len(), "classifier output had no comparable values");
        ClassifyError::EmptyOutput
    })?;

    let prediction = Prediction {
        index,
        label: classifier.label(index),
        confidence: max * 100.0,
    };
    debug!(index, label = %prediction.label, confidence = prediction.confidence, "classified");
    Ok(prediction)
}
