use bevy::prelude::*;

pub const VIEWPORT_WIDTH: f32 = 800.0;
pub const VIEWPORT_HEIGHT: f32 = 400.0;

/// Rectangular travel bounds centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Largest `|center|` per axis a body of `radius` can have while staying inside.
    #[inline]
    pub fn clamp_extents(&self, radius: f32) -> Vec2 {
        self.half_extents() - Vec2::splat(radius)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}
