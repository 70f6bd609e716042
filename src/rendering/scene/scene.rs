//! Renderer-agnostic scene description.
//!
//! The animation loop owns one `Scene` and one `CameraRig`; renderers read
//! them. Only the body's position and color change after startup.

use bevy::prelude::*;

use crate::simulation::viewport::Viewport;

pub const BACKGROUND_HEX: u32 = 0x4a4a3a;

pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 270.0;

pub const POINT_LIGHT_HEX: u32 = 0xffffff;
/// Luminous power in lumens. The scene is measured in pixels-as-meters, so the
/// light has to be far brighter than a real bulb to reach the sphere.
pub const POINT_LIGHT_INTENSITY: f32 = 300_000_000.0;
pub const POINT_LIGHT_RANGE: f32 = 1000.0;
pub const POINT_LIGHT_DEPTH: f32 = 200.0;

pub const AMBIENT_HEX: u32 = 0x404040;
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

pub const SPHERE_SEGMENTS: u32 = 32;

/// Fixed perspective camera looking down -Z at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl CameraRig {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        Self {
            fov_y_degrees: CAMERA_FOV_Y_DEGREES,
            aspect: viewport.aspect(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightSpec {
    pub color: u32,
    pub intensity: f32,
    pub range: f32,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLightSpec {
    pub color: u32,
    pub brightness: f32,
}

/// What a renderer needs to know about the sphere this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub position: Vec3,
    pub radius: f32,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: u32,
    pub point_light: PointLightSpec,
    pub ambient_light: AmbientLightSpec,
    pub body: BodyView,
}

impl Scene {
    /// Standard lighting for `viewport`, point light in the upper-left corner.
    pub fn new(viewport: &Viewport, body: BodyView) -> Self {
        let half = viewport.half_extents();
        Self {
            background: BACKGROUND_HEX,
            point_light: PointLightSpec {
                color: POINT_LIGHT_HEX,
                intensity: POINT_LIGHT_INTENSITY,
                range: POINT_LIGHT_RANGE,
                position: Vec3::new(-half.x, half.y, POINT_LIGHT_DEPTH),
            },
            ambient_light: AmbientLightSpec {
                color: AMBIENT_HEX,
                brightness: AMBIENT_BRIGHTNESS,
            },
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_sits_in_upper_left_corner() {
        let vp = Viewport::default();
        let scene = Scene::new(
            &vp,
            BodyView {
                position: Vec3::ZERO,
                radius: 20.0,
                color: 0xff0000,
            },
        );
        assert_eq!(scene.point_light.position, Vec3::new(-400.0, 200.0, 200.0));
    }

    #[test]
    fn camera_aspect_follows_viewport() {
        let rig = CameraRig::for_viewport(&Viewport::default());
        assert!((rig.aspect - 2.0).abs() < 1e-6);
        assert_eq!(rig.position.z, CAMERA_DISTANCE);
    }
}
