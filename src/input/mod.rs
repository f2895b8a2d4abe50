pub mod pointer;

pub use pointer::{InputEvent, MouseInput, Phase, PointerEvent, TouchInput, TouchPoint};
