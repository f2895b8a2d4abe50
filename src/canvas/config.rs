/// Geometry and pen parameters for a drawing session.
///
/// # Fields
/// - `max_side`    — upper bound on the square surface's side length
/// - `margin`      — subtracted from the viewport width before clamping
/// - `draw_width`  — stroke diameter in Draw mode
/// - `erase_width` — stroke diameter in Erase mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasConfig {
    pub max_side: u32,
    pub margin: u32,
    pub draw_width: f32,
    pub erase_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig { max_side: 280, margin: 40, draw_width: 10.0, erase_width: 20.0 }
    }
}
