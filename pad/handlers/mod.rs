pub mod canvas;
pub mod classify;
pub mod page;
