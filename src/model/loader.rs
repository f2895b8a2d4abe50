use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::network::network::Network;

/// The two model assets, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    /// Digits plus letters (EMNIST-style label set).
    Extended,
    /// Digits 0-9 only (MNIST-style).
    Digits,
}

impl ModelVariant {
    pub const LOAD_ORDER: [ModelVariant; 2] = [ModelVariant::Extended, ModelVariant::Digits];

    /// Path of this variant's model file relative to the model directory.
    pub fn relative_path(self) -> &'static str {
        match self {
            ModelVariant::Extended => "emnist_model/model.json",
            ModelVariant::Digits => "mnist_model/model.json",
        }
    }

    pub fn path_in(self, model_dir: &Path) -> PathBuf {
        model_dir.join(self.relative_path())
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelVariant::Extended => write!(f, "extended"),
            ModelVariant::Digits => write!(f, "digits"),
        }
    }
}

/// Result of a load attempt sequence.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(ModelVariant, Network),
    /// Every variant failed; the reason lists each attempt.
    Failed(String),
}

/// Tries the extended model first and falls back to the digits-only model.
pub fn load_with_fallback(model_dir: &Path) -> LoadOutcome {
    let mut reasons = Vec::new();
    for variant in ModelVariant::LOAD_ORDER {
        let path = variant.path_in(model_dir);
        match Network::load_json(&path) {
            Ok(network) => {
                info!(%variant, path = %path.display(), classes = network.output_size(), "model loaded");
                return LoadOutcome::Loaded(variant, network);
            }
            Err(e) => {
                warn!(%variant, path = %path.display(), error = %e, "model variant unavailable");
                reasons.push(format!("{}: {}", path.display(), e));
            }
        }
    }
    LoadOutcome::Failed(reasons.join("; "))
}
