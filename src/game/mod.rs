//! Game module - the per-tick orchestrator and its fixed-step driver.

mod orchestrator;
mod plugin;

pub use orchestrator::{Frame, Game};
pub use plugin::{GamePlugin, LatestFrame};
