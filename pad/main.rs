/// ferrite-sketch pad
///
/// Browser sketch pad for handwritten digits. The page forwards pointer and
/// touch strokes; the server rasterizes them, normalizes the surface to a
/// 28×28 tensor and classifies it with a pretrained ferrite-nn model.
///
/// Run with:
///   cargo run --bin sketchpad --release -- --model-dir models
/// Then open http://127.0.0.1:7878
///
/// Models are looked up as `<model-dir>/emnist_model/model.json`, falling
/// back to `<model-dir>/mnist_model/model.json`.

mod config;
mod state;
mod render;
mod routes;
mod handlers;

use anyhow::anyhow;
use clap::Parser;
use tiny_http::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferrite_sketch::ModelState;

use config::Args;
use state::PadState;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let server = Server::http(&args.addr)
        .map_err(|e| anyhow!("failed to bind {}: {}", args.addr, e))?;

    // Loading is fire-and-forget; drawing works while it runs.
    let model = ModelState::spawn(args.model_dir.clone());
    let mut state = PadState::new(args.canvas_config(), model);

    info!(addr = %args.addr, model_dir = %args.model_dir.display(), "sketch pad listening");

    // Requests are served one at a time on this thread, so the surface is
    // never shared and needs no lock.
    for request in server.incoming_requests() {
        state.model.poll();
        routes::dispatch(request, &mut state);
    }
    Ok(())
}
