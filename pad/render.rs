/// Template renderer for the sketch pad page.
///
/// The page is a single HTML template (`pad/assets/pad.html`) with
/// placeholder tokens like `{{TOKEN}}`, embedded at compile time. Tokens the
/// caller does not fill are blanked so raw `{{TOKEN}}` never reaches the
/// browser.

use ferrite_sketch::input::TouchInput;

use crate::state::StatusBody;

const TEMPLATE: &str = include_str!("assets/pad.html");

/// Renders the page with the server's current state baked in, so the first
/// paint matches the session before any script runs.
pub fn render_page(status: &StatusBody) -> String {
    let mode = serde_json::to_string(&status.mode).unwrap_or_else(|_| "\"draw\"".into());
    let html = TEMPLATE
        .replace("{{SIDE}}",         &status.side.to_string())
        .replace("{{MODE}}",         mode.trim_matches('"'))
        .replace("{{LINE_WIDTH}}",   &status.line_width.to_string())
        .replace("{{MODEL_STATUS}}", status.model)
        .replace("{{TOUCH_PASSIVE}}", if TouchInput::SUPPRESSES_DEFAULT { "false" } else { "true" })
        .replace("{{RESULT}}",       &html_escape(status.result.as_deref().unwrap_or("")));
    blank_remaining(html)
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with an
/// empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
