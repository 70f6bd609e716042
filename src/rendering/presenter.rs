//! Bevy-backed [`Renderer`]: mirrors the loop's scene into the body entity.
//! Camera and lights are fixed and spawned once by the scene setup, so only
//! the body transform and material color are written here.

use bevy::prelude::*;

use super::palette::color_from_hex;
use super::renderer::Renderer;
use super::scene::{CameraRig, Scene};

pub struct BevyPresenter<'a> {
    pub transform: &'a mut Transform,
    pub material: Option<AssetId<StandardMaterial>>,
    pub materials: Option<&'a mut Assets<StandardMaterial>>,
}

impl Renderer for BevyPresenter<'_> {
    fn render(&mut self, scene: &Scene, _camera: &CameraRig) {
        self.transform.translation = scene.body.position;

        let (Some(id), Some(materials)) = (self.material, self.materials.as_deref_mut()) else {
            return;
        };
        let color = color_from_hex(scene.body.color);
        // get_mut flags the asset for re-upload; skip it when nothing changed.
        let stale = materials.get(id).is_some_and(|m| m.base_color != color);
        if stale {
            if let Some(m) = materials.get_mut(id) {
                m.base_color = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::AnimationLoop;

    #[test]
    fn writes_translation_without_materials() {
        let mut anim = AnimationLoop::default();
        let mut transform = Transform::default();
        let mut presenter = BevyPresenter {
            transform: &mut transform,
            material: None,
            materials: None,
        };
        for _ in 0..3 {
            anim.frame(&mut presenter);
        }
        assert_eq!(transform.translation, Vec3::new(15.0, 15.0, 0.0));
    }
}
