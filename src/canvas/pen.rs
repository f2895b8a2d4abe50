use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::canvas::config::CanvasConfig;
use crate::canvas::surface::{BLACK, WHITE};

/// Drawing tool selection. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenMode {
    #[default]
    Draw,
    /// Paints in the background colour; there is no transparency to remove.
    Erase,
}

/// Current pen configuration plus the "stroke in progress" flag.
///
/// Caps and joins are always round; that is the only shape
/// `RasterSurface::stroke_segment` paints.
#[derive(Debug, Clone, PartialEq)]
pub struct PenState {
    mode: PenMode,
    line_width: f32,
    color: Rgba<u8>,
    active: bool,
}

impl PenState {
    /// A Draw-mode pen with no stroke in progress.
    pub fn new(config: &CanvasConfig) -> PenState {
        let mut pen = PenState { mode: PenMode::Draw, line_width: 0.0, color: BLACK, active: false };
        pen.set_mode(PenMode::Draw, config);
        pen
    }

    /// Switches tool. Does not end a stroke in progress.
    pub fn set_mode(&mut self, mode: PenMode, config: &CanvasConfig) {
        self.mode = mode;
        match mode {
            PenMode::Draw => {
                self.line_width = config.draw_width;
                self.color = BLACK;
            }
            PenMode::Erase => {
                self.line_width = config.erase_width;
                self.color = WHITE;
            }
        }
    }

    pub fn mode(&self) -> PenMode {
        self.mode
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
