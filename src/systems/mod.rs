//! Application systems
//!
//! Window, animation timing and GPU rendering, kept out of `main.rs` so each
//! can be tested on its own.

mod animation;
mod render;
mod window;

pub use animation::AnimationSystem;
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
