use serde::Deserialize;
use tracing::debug;

use crate::canvas::config::CanvasConfig;
use crate::canvas::pen::{PenMode, PenState};
use crate::canvas::surface::{Point, RasterSurface};
use crate::input::pointer::{InputEvent, Phase, PointerEvent};

/// Host viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Side length for a viewport: `min(width - margin, max_side)`, at least 1.
pub fn side_for_viewport(config: &CanvasConfig, viewport: Viewport) -> u32 {
    let max_side = config.max_side.max(1);
    viewport.width.saturating_sub(config.margin).clamp(1, max_side)
}

/// Owns the raster surface and pen, and turns pointer events into strokes.
///
/// Strokes are committed straight onto the surface; nothing is kept that
/// would allow undo or redraw after a resize.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    config: CanvasConfig,
    surface: RasterSurface,
    pen: PenState,
    last_point: Option<Point>,
    offset: Point,
    result_text: Option<String>,
}

impl DrawingSession {
    pub fn new(config: CanvasConfig, viewport: Viewport) -> DrawingSession {
        DrawingSession {
            surface: RasterSurface::new(side_for_viewport(&config, viewport)),
            pen: PenState::new(&config),
            last_point: None,
            offset: Point::new(0.0, 0.0),
            result_text: None,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn pen(&self) -> &PenState {
        &self.pen
    }

    pub fn mode(&self) -> PenMode {
        self.pen.mode()
    }

    /// Recreates the surface for a new viewport. All prior drawing is lost
    /// and any stroke in progress ends.
    pub fn resize(&mut self, viewport: Viewport) {
        let side = side_for_viewport(&self.config, viewport);
        self.surface = RasterSurface::new(side);
        self.end_stroke();
        debug!(width = viewport.width, height = viewport.height, side, "surface recreated");
    }

    /// Records where the surface sits on screen (its bounding-box top-left).
    pub fn set_offset(&mut self, left: f32, top: f32) {
        self.offset = Point::new(left, top);
    }

    pub fn set_mode(&mut self, mode: PenMode) {
        self.pen.set_mode(mode, &self.config);
    }

    fn to_local(&self, event: PointerEvent) -> Point {
        Point::new(event.x - self.offset.x, event.y - self.offset.y)
    }

    pub fn begin_stroke(&mut self, event: PointerEvent) {
        self.pen.set_active(true);
        self.last_point = Some(self.to_local(event));
    }

    /// Draws from the last point to `event`. Ignored when no stroke is active.
    pub fn extend_stroke(&mut self, event: PointerEvent) {
        if !self.pen.is_active() {
            return;
        }
        let to = self.to_local(event);
        if let Some(from) = self.last_point {
            self.surface.stroke_segment(from, to, self.pen.line_width(), self.pen.color());
        }
        self.last_point = Some(to);
    }

    pub fn end_stroke(&mut self) {
        self.pen.set_active(false);
        self.last_point = None;
    }

    /// Whitens the surface and drops the displayed result. The pen mode is kept.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.result_text = None;
    }

    /// Routes a raw host event to the matching stroke operation.
    pub fn apply(&mut self, event: &InputEvent) {
        match event.phase() {
            Phase::Down => {
                if let Some(p) = event.pointer() {
                    self.begin_stroke(p);
                }
            }
            Phase::Move => {
                if let Some(p) = event.pointer() {
                    self.extend_stroke(p);
                }
            }
            Phase::Up | Phase::Out => self.end_stroke(),
        }
    }

    pub fn result_text(&self) -> Option<&str> {
        self.result_text.as_deref()
    }

    pub fn set_result_text(&mut self, text: Option<String>) {
        self.result_text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::surface::{BLACK, WHITE};

    fn session() -> DrawingSession {
        DrawingSession::new(CanvasConfig::default(), Viewport { width: 1024, height: 768 })
    }

    fn at(x: f32, y: f32) -> PointerEvent {
        PointerEvent { x, y }
    }

    #[test]
    fn side_is_clamped() {
        let config = CanvasConfig::default();
        assert_eq!(side_for_viewport(&config, Viewport { width: 1920, height: 1080 }), 280);
        assert_eq!(side_for_viewport(&config, Viewport { width: 300, height: 600 }), 260);
        assert_eq!(side_for_viewport(&config, Viewport { width: 40, height: 600 }), 1);
        assert_eq!(side_for_viewport(&config, Viewport { width: 0, height: 0 }), 1);
    }

    #[test]
    fn extend_without_begin_is_noop() {
        let mut s = session();
        s.extend_stroke(at(10.0, 10.0));
        s.extend_stroke(at(50.0, 50.0));
        assert!(s.surface().is_blank());

        s.begin_stroke(at(10.0, 10.0));
        s.end_stroke();
        s.extend_stroke(at(50.0, 50.0));
        assert!(s.surface().is_blank());
    }

    #[test]
    fn stroke_is_drawn_in_surface_local_coordinates() {
        let mut s = session();
        s.set_offset(100.0, 50.0);
        s.begin_stroke(at(110.0, 60.0));
        s.extend_stroke(at(110.0, 70.0));
        assert_eq!(s.surface().pixel(10, 15), BLACK);
        assert_eq!(s.surface().pixel(110, 65), WHITE);
    }

    #[test]
    fn erase_paints_white_with_wider_pen() {
        let mut s = session();
        s.begin_stroke(at(50.0, 10.0));
        s.extend_stroke(at(50.0, 100.0));
        s.end_stroke();
        assert_eq!(s.surface().pixel(50, 50), BLACK);

        s.set_mode(PenMode::Erase);
        s.begin_stroke(at(20.0, 50.0));
        s.extend_stroke(at(80.0, 50.0));
        s.end_stroke();
        assert_eq!(s.surface().pixel(50, 50), WHITE);
        assert_eq!(s.surface().pixel(50, 20), BLACK);
    }

    #[test]
    fn end_stroke_is_idempotent() {
        let mut s = session();
        s.end_stroke();
        s.end_stroke();
        assert!(!s.pen().is_active());
    }

    #[test]
    fn clear_keeps_mode_and_drops_result() {
        let mut s = session();
        s.set_mode(PenMode::Erase);
        s.set_result_text(Some("Predicted digit: 1".into()));
        s.clear();
        assert_eq!(s.mode(), PenMode::Erase);
        assert_eq!(s.result_text(), None);
    }

    #[test]
    fn resize_discards_drawing_and_active_stroke() {
        let mut s = session();
        s.begin_stroke(at(10.0, 10.0));
        s.extend_stroke(at(30.0, 30.0));
        s.resize(Viewport { width: 200, height: 200 });
        assert_eq!(s.surface().side(), 160);
        assert!(s.surface().is_blank());
        assert!(!s.pen().is_active());
        s.extend_stroke(at(50.0, 50.0));
        assert!(s.surface().is_blank());
    }

    #[test]
    fn mouse_out_ends_the_stroke() {
        let mut s = session();
        let events: Vec<InputEvent> = serde_json::from_str(r#"[
            {"source":"mouse","phase":"down","clientX":20,"clientY":20},
            {"source":"mouse","phase":"move","clientX":20,"clientY":40},
            {"source":"mouse","phase":"out","clientX":20,"clientY":40}
        ]"#).unwrap();
        for e in &events {
            s.apply(e);
        }
        assert!(!s.pen().is_active());
        let before = s.surface().clone();

        let stray: InputEvent = serde_json::from_str(
            r#"{"source":"mouse","phase":"move","clientX":100,"clientY":100}"#,
        ).unwrap();
        s.apply(&stray);
        assert_eq!(s.surface(), &before);
    }

    #[test]
    fn touch_without_contacts_is_ignored() {
        let mut s = session();
        let events: Vec<InputEvent> = serde_json::from_str(r#"[
            {"source":"touch","phase":"down","touches":[]},
            {"source":"touch","phase":"move","touches":[]},
            {"source":"touch","phase":"move"}
        ]"#).unwrap();
        for e in &events {
            s.apply(e);
        }
        assert!(s.surface().is_blank());
        assert!(!s.pen().is_active());
    }

    #[test]
    fn input_events_drive_strokes() {
        let mut s = session();
        let events: Vec<InputEvent> = serde_json::from_str(r#"[
            {"source":"touch","phase":"down","touches":[{"clientX":20,"clientY":20}]},
            {"source":"touch","phase":"move","touches":[{"clientX":20,"clientY":40}]},
            {"source":"touch","phase":"up"},
            {"source":"mouse","phase":"move","clientX":200,"clientY":200}
        ]"#).unwrap();
        for e in &events {
            s.apply(e);
        }
        assert_eq!(s.surface().pixel(20, 30), BLACK);
        assert_eq!(s.surface().pixel(200, 200), WHITE);
        assert!(!s.pen().is_active());
    }
}
