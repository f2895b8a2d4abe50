use serde::Serialize;

use ferrite_sketch::{CanvasConfig, DrawingSession, ModelState, ModelVariant, PenMode, Viewport};

/// Everything the request loop owns: one drawing session and the model slot.
pub struct PadState {
    pub session: DrawingSession,
    pub model:   ModelState,
}

/// JSON snapshot returned by most endpoints so the page can resync.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub model:      &'static str,
    pub variant:    Option<ModelVariant>,
    pub mode:       PenMode,
    pub line_width: f32,
    pub side:       u32,
    pub result:     Option<String>,
}

impl PadState {
    pub fn new(config: CanvasConfig, model: ModelState) -> Self {
        // Until the page reports its viewport, assume one wide enough for the
        // largest surface.
        let viewport = Viewport {
            width:  config.max_side.saturating_add(config.margin),
            height: config.max_side.saturating_add(config.margin),
        };
        PadState {
            session: DrawingSession::new(config, viewport),
            model,
        }
    }

    pub fn status(&self) -> StatusBody {
        StatusBody {
            model:      self.model.status(),
            variant:    self.model.variant(),
            mode:       self.session.mode(),
            line_width: self.session.pen().line_width(),
            side:       self.session.surface().side(),
            result:     self.session.result_text().map(str::to_owned),
        }
    }
}
