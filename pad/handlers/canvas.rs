use std::io::Cursor;

use serde::Deserialize;
use tiny_http::{Request, Response};
use tracing::{debug, error};

use ferrite_sketch::{InputEvent, PenMode, Viewport};

use crate::routes::{bad_request, internal_error, json_response, png_response, read_json};
use crate::state::PadState;

/// Body of `POST /canvas/resize`.
#[derive(Debug, Deserialize)]
struct ResizeRequest {
    width:  u32,
    height: u32,
    #[serde(default)]
    left:   f32,
    #[serde(default)]
    top:    f32,
}

/// Body of `POST /canvas/events`: one stroke's worth of raw host events plus
/// the surface's current on-screen offset.
#[derive(Debug, Deserialize)]
struct EventsRequest {
    #[serde(default)]
    left:   f32,
    #[serde(default)]
    top:    f32,
    events: Vec<InputEvent>,
}

// ---------------------------------------------------------------------------
// POST /canvas/resize
// ---------------------------------------------------------------------------

pub fn handle_resize(request: &mut Request, state: &mut PadState) -> Response<Cursor<Vec<u8>>> {
    let body: ResizeRequest = match read_json(request) {
        Ok(b)  => b,
        Err(e) => return bad_request(&e),
    };
    state.session.resize(Viewport { width: body.width, height: body.height });
    state.session.set_offset(body.left, body.top);
    json_response(200, &state.status())
}

// ---------------------------------------------------------------------------
// POST /canvas/clear
// ---------------------------------------------------------------------------

pub fn handle_clear(state: &mut PadState) -> Response<Cursor<Vec<u8>>> {
    state.session.clear();
    json_response(200, &state.status())
}

// ---------------------------------------------------------------------------
// POST /canvas/mode/{draw,erase}
// ---------------------------------------------------------------------------

pub fn handle_mode(mode: PenMode, state: &mut PadState) -> Response<Cursor<Vec<u8>>> {
    state.session.set_mode(mode);
    debug!(?mode, "pen mode");
    json_response(200, &state.status())
}

// ---------------------------------------------------------------------------
// POST /canvas/events
// ---------------------------------------------------------------------------

pub fn handle_events(request: &mut Request, state: &mut PadState) -> Response<Cursor<Vec<u8>>> {
    let body: EventsRequest = match read_json(request) {
        Ok(b)  => b,
        Err(e) => return bad_request(&e),
    };
    state.session.set_offset(body.left, body.top);
    for event in &body.events {
        state.session.apply(event);
    }
    debug!(count = body.events.len(), "input events applied");
    json_response(200, &state.status())
}

// ---------------------------------------------------------------------------
// GET /canvas.png
// ---------------------------------------------------------------------------

pub fn handle_png(state: &PadState) -> Response<Cursor<Vec<u8>>> {
    match state.session.surface().encode_png() {
        Ok(bytes) => png_response(bytes),
        Err(e) => {
            error!(error = %e, "surface encoding failed");
            internal_error(&e.to_string())
        }
    }
}
