pub mod loader;
pub mod state;

pub use loader::{load_with_fallback, LoadOutcome, ModelVariant};
pub use state::ModelState;
