//! Bouncing-body simulation: fixed-step integration against the viewport walls.

pub mod animation_loop;
pub mod frame_step;
pub mod plugin;
pub mod viewport;

pub use animation_loop::AnimationLoop;
pub use frame_step::{Axis, BounceState, Contact, StepReport, Wall, BODY_RADIUS, INITIAL_VELOCITY};
pub use plugin::{AnimationLoopPlugin, WallContact};
pub use viewport::{Viewport, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
