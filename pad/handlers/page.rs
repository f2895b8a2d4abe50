use std::io::Cursor;

use tiny_http::Response;

use crate::render::render_page;
use crate::state::PadState;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: &PadState) -> Response<Cursor<Vec<u8>>> {
    crate::routes::html_response(render_page(&state.status()))
}
