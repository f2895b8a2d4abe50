use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::error;

use crate::classify::Classifier;
use crate::error::ClassifyError;
use crate::model::loader::{load_with_fallback, LoadOutcome, ModelVariant};
use crate::network::network::Network;

/// Load lifecycle of the classifier, as seen by the request loop.
pub enum ModelState {
    /// Background load still running; the outcome arrives on the channel.
    Loading(Receiver<LoadOutcome>),
    Ready { variant: ModelVariant, network: Network },
    /// Permanent for this process.
    Failed(String),
}

impl ModelState {
    /// Starts loading on a background thread and returns immediately.
    pub fn spawn(model_dir: PathBuf) -> ModelState {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver only goes away on shutdown.
            let _ = tx.send(load_with_fallback(&model_dir));
        });
        ModelState::Loading(rx)
    }

    /// Picks up a finished background load. Cheap to call on every request.
    pub fn poll(&mut self) {
        let outcome = match self {
            ModelState::Loading(rx) => match rx.try_recv() {
                Ok(outcome) => outcome,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    LoadOutcome::Failed("loader thread exited without a result".into())
                }
            },
            _ => return,
        };

        *self = match outcome {
            LoadOutcome::Loaded(variant, network) => ModelState::Ready { variant, network },
            LoadOutcome::Failed(reason) => {
                error!(%reason, "Failed to load the model");
                ModelState::Failed(reason)
            }
        };
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready { .. })
    }

    pub fn variant(&self) -> Option<ModelVariant> {
        match self {
            ModelState::Ready { variant, .. } => Some(*variant),
            _ => None,
        }
    }

    /// Short status word for the page: `loading`, `ready` or `failed`.
    pub fn status(&self) -> &'static str {
        match self {
            ModelState::Loading(_) => "loading",
            ModelState::Ready { .. } => "ready",
            ModelState::Failed(_) => "failed",
        }
    }

    /// The loaded classifier, or why there is none.
    pub fn classifier(&self) -> Result<&dyn Classifier, ClassifyError> {
        match self {
            ModelState::Loading(_) => Err(ClassifyError::NotReady),
            ModelState::Ready { network, .. } => Ok(network),
            ModelState::Failed(reason) => Err(ClassifyError::Unavailable(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_state_is_not_ready() {
        let (_tx, rx) = mpsc::channel();
        let mut state = ModelState::Loading(rx);
        state.poll();
        assert!(!state.is_ready());
        assert_eq!(state.status(), "loading");
        assert_eq!(state.classifier().err(), Some(ClassifyError::NotReady));
    }

    #[test]
    fn dropped_loader_becomes_failed() {
        let (tx, rx) = mpsc::channel::<LoadOutcome>();
        drop(tx);
        let mut state = ModelState::Loading(rx);
        state.poll();
        assert_eq!(state.status(), "failed");
        assert!(matches!(state.classifier(), Err(ClassifyError::Unavailable(_))));
    }

    #[test]
    fn outcome_is_picked_up_once() {
        let (tx, rx) = mpsc::channel();
        tx.send(LoadOutcome::Failed("missing".into())).unwrap();
        let mut state = ModelState::Loading(rx);
        state.poll();
        state.poll();
        match state {
            ModelState::Failed(reason) => assert_eq!(reason, "missing"),
            _ => panic!("expected Failed"),
        }
    }
}
