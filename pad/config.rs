use std::path::PathBuf;

use clap::Parser;

use ferrite_sketch::CanvasConfig;

/// Command-line configuration for the sketch pad server.
#[derive(Parser, Debug)]
#[command(name = "sketchpad", version, about = "Handwritten digit sketch pad")]
pub struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:7878")]
    pub addr: String,

    /// Directory holding `emnist_model/` and/or `mnist_model/`.
    #[arg(long, default_value = "models")]
    pub model_dir: PathBuf,

    /// Largest surface side length in pixels.
    #[arg(long, default_value_t = 280)]
    pub max_side: u32,

    /// Horizontal margin subtracted from the viewport width.
    #[arg(long, default_value_t = 40)]
    pub margin: u32,

    #[arg(long, default_value_t = 10.0)]
    pub draw_width: f32,

    #[arg(long, default_value_t = 20.0)]
    pub erase_width: f32,
}

impl Args {
    pub fn canvas_config(&self) -> CanvasConfig {
        CanvasConfig {
            max_side: self.max_side,
            margin: self.margin,
            draw_width: self.draw_width,
            erase_width: self.erase_width,
        }
    }
}
