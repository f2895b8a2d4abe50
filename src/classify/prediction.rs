use std::fmt;

use serde::Serialize;

/// Outcome of one classification request. Never stored between requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Index of the winning class.
    pub index: usize,
    /// Display label (digit, or letter for the extended model).
    pub label: String,
    /// Winning probability × 100.
    pub confidence: f64,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted digit: {} (Confidence: {:.2}%)", self.label, self.confidence)
    }
}

/// Index and value of the largest probability.
///
/// Scans left to right and only replaces on a strictly greater value, so the
/// lowest index wins ties. NaN never wins. Returns `None` when no finite
/// comparison is possible (empty or all-NaN input).
pub fn argmax(probabilities: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in probabilities.iter().enumerate() {
        if p.is_nan() {
            continue;
        }
        match best {
            Some((_, v)) if p <= v => {}
            _ => best = Some((i, p)),
        }
    }
    best
}
