use bevy::prelude::*;

/// Marker for the single bouncing sphere entity.
#[derive(Component, Debug, Default, Copy, Clone)]
pub struct Body;
