pub mod app;
pub mod core;
pub mod debug;
pub mod rendering;
pub mod session;
pub mod simulation;

// Curated re-exports
pub use app::demo::DemoPlugin;
pub use crate::core::components::Body;
pub use crate::core::config::{DemoConfig, WindowConfig};
pub use rendering::palette::{Palette, PaletteCursor};
pub use rendering::renderer::Renderer;
pub use simulation::{AnimationLoop, AnimationLoopPlugin, StepReport, Viewport, WallContact};
