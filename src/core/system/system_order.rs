//! Central system ordering labels for the `Update` schedule.
//! 1. FrameStep (advance the loop & present into the ECS)
//! 2. PostFrame (observers: debug logging, session timers)
//! 3. Rendering (implicit, Bevy render world)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct FrameStepSet; // exactly one logical step per frame

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostFrameSet; // read-only consumers of the stepped state
