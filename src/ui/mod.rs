//! Console front end: plain-text frame rendering, the mode menu, and the
//! game loop that drives move sources against the engine.

mod app;
pub mod render;

pub use app::{prompt_mode, sources_for_mode, App, DisplayConfig};
