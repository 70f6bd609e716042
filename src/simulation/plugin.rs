use bevy::prelude::*;

use super::animation_loop::AnimationLoop;
use super::frame_step::{Axis, Wall};
use crate::core::components::Body;
use crate::core::system::FrameStepSet;
use crate::rendering::presenter::BevyPresenter;

/// Fired once per axis check that hit a wall.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallContact {
    pub frame: u64,
    pub axis: Axis,
    pub wall: Wall,
    pub color_index: usize,
}

/// Drives [`AnimationLoop`] from the `Update` schedule: one step per app update.
pub struct AnimationLoopPlugin;

impl Plugin for AnimationLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationLoop>()
            .add_event::<WallContact>()
            .add_systems(Update, advance_frame.in_set(FrameStepSet));
    }
}

fn advance_frame(
    mut anim: ResMut<AnimationLoop>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
    mut q_body: Query<(&mut Transform, Option<&MeshMaterial3d<StandardMaterial>>), With<Body>>,
    mut ev_contact: EventWriter<WallContact>,
) {
    let Ok((mut transform, material)) = q_body.single_mut() else {
        return;
    };
    let mut presenter = BevyPresenter {
        transform: &mut transform,
        material: material.map(|m| m.id()),
        materials: materials.as_deref_mut(),
    };
    let report = anim.frame(&mut presenter);
    for c in &report.contacts {
        ev_contact.write(WallContact {
            frame: report.frame,
            axis: c.axis,
            wall: c.wall,
            color_index: c.color_index,
        });
    }
}
