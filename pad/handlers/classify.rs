use std::io::Cursor;

use serde::Serialize;
use tiny_http::Response;
use tracing::{info, warn};

use ferrite_sketch::{classify, normalize, ClassifyError};

use crate::routes::json_response;
use crate::state::PadState;

#[derive(Debug, Serialize)]
struct ClassifyBody {
    ok:         bool,
    text:       String,
    label:      Option<String>,
    confidence: Option<f64>,
}

// ---------------------------------------------------------------------------
// POST /classify
// ---------------------------------------------------------------------------

/// Classifies the current surface. Failures are reported in the body and
/// leave the surface and pen untouched.
pub fn handle_post(state: &mut PadState) -> Response<Cursor<Vec<u8>>> {
    let session = &state.session;
    let outcome = classify(&state.model, || normalize(session.surface()));

    let body = match outcome {
        Ok(prediction) => {
            info!(label = %prediction.label, confidence = prediction.confidence, "prediction");
            ClassifyBody {
                ok:         true,
                text:       prediction.to_string(),
                label:      Some(prediction.label),
                confidence: Some(prediction.confidence),
            }
        }
        Err(e) => {
            match &e {
                ClassifyError::NotReady => warn!("classification requested before model load"),
                other => warn!(error = %other, "classification failed"),
            }
            ClassifyBody { ok: false, text: user_message(&e), label: None, confidence: None }
        }
    };

    state.session.set_result_text(Some(body.text.clone()));
    json_response(200, &body)
}

/// Short text for the result line. Load failures don't repeat the file paths.
fn user_message(e: &ClassifyError) -> String {
    match e {
        ClassifyError::Unavailable(_) => "Failed to load the model".to_owned(),
        other => other.to_string(),
    }
}
