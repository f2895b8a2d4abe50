use std::io::Cursor;

use serde::{de::DeserializeOwned, Serialize};
use tiny_http::{Header, Method, Request, Response, StatusCode};
use tracing::{debug, warn};

use ferrite_sketch::PenMode;

use crate::state::PadState;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn header(name: &str, value: &str) -> Header {
    Header::from_bytes(name.as_bytes(), value.as_bytes()).expect("static header is valid ASCII")
}

fn bytes_response(status: u16, content_type: &str, bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![
            header("Content-Type", content_type),
            header("Cache-Control", "no-store"),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, "text/html; charset=utf-8", body.into_bytes())
}

pub fn png_response(bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, "image/png", bytes)
}

pub fn json_response<T: Serialize>(status: u16, body: &T) -> Response<Cursor<Vec<u8>>> {
    match serde_json::to_vec(body) {
        Ok(bytes) => bytes_response(status, "application/json", bytes),
        Err(e) => internal_error(&e.to_string()),
    }
}

pub fn bad_request(msg: &str) -> Response<Cursor<Vec<u8>>> {
    json_response(400, &serde_json::json!({ "error": msg }))
}

pub fn internal_error(msg: &str) -> Response<Cursor<Vec<u8>>> {
    bytes_response(500, "text/plain", msg.as_bytes().to_vec())
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    bytes_response(404, "text/plain", b"404 Not Found".to_vec())
}

/// Parses the request body as JSON.
pub fn read_json<T: DeserializeOwned>(request: &mut Request) -> Result<T, String> {
    serde_json::from_reader(request.as_reader()).map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches one request. Runs on the single request-loop thread.
pub fn dispatch(mut request: Request, state: &mut PadState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();
    let path   = url.split('?').next().unwrap_or("").to_owned();
    debug!(%method, %path, "request");

    let response = match (method, path.as_str()) {
        (Method::Get,  "/")                  => handlers::page::handle_get(state),
        (Method::Get,  "/status")            => json_response(200, &state.status()),
        (Method::Get,  "/canvas.png")        => handlers::canvas::handle_png(state),

        (Method::Post, "/canvas/resize")     => handlers::canvas::handle_resize(&mut request, state),
        (Method::Post, "/canvas/clear")      => handlers::canvas::handle_clear(state),
        (Method::Post, "/canvas/mode/draw")  => handlers::canvas::handle_mode(PenMode::Draw, state),
        (Method::Post, "/canvas/mode/erase") => handlers::canvas::handle_mode(PenMode::Erase, state),
        (Method::Post, "/canvas/events")     => handlers::canvas::handle_events(&mut request, state),

        (Method::Post, "/classify")          => handlers::classify::handle_post(state),

        _ => not_found(),
    };

    if let Err(e) = request.respond(response) {
        warn!(error = %e, "failed to send response");
    }
}
