//! Rendering module - draw primitives and the sprite sink that shows them.

mod draw;
mod plugin;
pub mod visual_config;

pub use draw::{DrawCommand, DrawTag};
pub use plugin::{screen_to_world, FrameSprite, RenderingPlugin};
pub use visual_config::VisualConfig;
