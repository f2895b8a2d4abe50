//! Boundary adapters from host event shapes to a single `PointerEvent`.
//!
//! Events arrive as JSON from the page script, tagged by `source`:
//!
//! ```json
//! {"source": "mouse", "phase": "move", "clientX": 12.0, "clientY": 40.5}
//! {"source": "touch", "phase": "down", "touches": [{"clientX": 3.0, "clientY": 4.0}]}
//! ```

use serde::{Deserialize, Serialize};

/// A single pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

/// Mouse event position as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseInput {
    pub client_x: f32,
    pub client_y: f32,
}

impl From<MouseInput> for PointerEvent {
    fn from(m: MouseInput) -> Self {
        PointerEvent { x: m.client_x, y: m.client_y }
    }
}

/// One touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

/// A touch event's contact list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchInput<'a> {
    pub touches: &'a [TouchPoint],
}

impl TouchInput<'_> {
    /// Rendered into the page as the touch listeners' `passive` option (the
    /// inverse). When set, the script calls `preventDefault()` on every touch
    /// event it forwards, so the surface never scrolls or zooms mid-stroke.
    pub const SUPPRESSES_DEFAULT: bool = true;

    /// Only the first contact draws; additional fingers are ignored.
    pub fn primary(&self) -> Option<PointerEvent> {
        self.touches.first().map(|t| PointerEvent { x: t.client_x, y: t.client_y })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Down,
    Move,
    Up,
    /// Pointer left the surface; ends the stroke like `Up`.
    Out,
}

/// A raw host event, before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum InputEvent {
    Mouse {
        phase: Phase,
        #[serde(rename = "clientX", default)]
        client_x: f32,
        #[serde(rename = "clientY", default)]
        client_y: f32,
    },
    Touch {
        phase: Phase,
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
}

impl InputEvent {
    pub fn phase(&self) -> Phase {
        match self {
            InputEvent::Mouse { phase, .. } | InputEvent::Touch { phase, .. } => *phase,
        }
    }

    /// Normalized position, or `None` for a touch event without contacts.
    pub fn pointer(&self) -> Option<PointerEvent> {
        match self {
            InputEvent::Mouse { client_x, client_y, .. } => {
                Some(MouseInput { client_x: *client_x, client_y: *client_y }.into())
            }
            InputEvent::Touch { touches, .. } => TouchInput { touches }.primary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_and_touch_normalize_to_same_shape() {
        let mouse: InputEvent = serde_json::from_str(
            r#"{"source":"mouse","phase":"down","clientX":5.5,"clientY":7}"#,
        ).unwrap();
        let touch: InputEvent = serde_json::from_str(
            r#"{"source":"touch","phase":"down","touches":[{"clientX":5.5,"clientY":7},{"clientX":99,"clientY":99}]}"#,
        ).unwrap();

        assert_eq!(mouse.phase(), Phase::Down);
        assert_eq!(mouse.pointer(), touch.pointer());
        assert_eq!(touch.pointer(), Some(PointerEvent { x: 5.5, y: 7.0 }));
    }

    #[test]
    fn touch_end_has_no_position() {
        let end: InputEvent = serde_json::from_str(r#"{"source":"touch","phase":"up"}"#).unwrap();
        assert_eq!(end.phase(), Phase::Up);
        assert_eq!(end.pointer(), None);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let parsed = serde_json::from_str::<InputEvent>(r#"{"source":"pen","phase":"down"}"#);
        assert!(parsed.is_err());
    }
}
