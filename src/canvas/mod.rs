pub mod config;
pub mod pen;
pub mod session;
pub mod surface;

pub use config::CanvasConfig;
pub use pen::{PenMode, PenState};
pub use session::{DrawingSession, Viewport};
pub use surface::{Point, RasterSurface, BLACK, WHITE};
