//! The animation loop: owns the scene and the moving state, steps once per
//! frame and hands the result to a [`Renderer`].

use bevy::prelude::*;

use super::frame_step::{self, BounceState, StepReport, BODY_RADIUS, INITIAL_VELOCITY};
use super::viewport::Viewport;
use crate::rendering::palette::Palette;
use crate::rendering::renderer::Renderer;
use crate::rendering::scene::{BodyView, CameraRig, Scene};

#[derive(Resource, Debug, Clone)]
pub struct AnimationLoop {
    viewport: Viewport,
    palette: Palette,
    camera: CameraRig,
    scene: Scene,
    state: BounceState,
    frame: u64,
    contacts: u64,
}

impl AnimationLoop {
    /// Body at the origin with the first palette color.
    pub fn new(viewport: Viewport, palette: Palette, radius: f32, velocity: Vec2) -> Self {
        let state = BounceState {
            position: Vec3::ZERO,
            velocity,
            radius,
            cursor: palette.cursor(),
        };
        let body = BodyView {
            position: state.position,
            radius,
            color: palette.hex_at(state.cursor),
        };
        Self {
            viewport,
            palette,
            camera: CameraRig::for_viewport(&viewport),
            scene: Scene::new(&viewport, body),
            state,
            frame: 0,
            contacts: 0,
        }
    }

    /// Moves the body without touching velocity or color.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.state.position = position;
        self.scene.body.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.state.velocity = velocity;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> &BounceState {
        &self.state
    }

    /// Frames stepped so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Wall contacts seen so far (a corner hit counts twice).
    pub fn contact_count(&self) -> u64 {
        self.contacts
    }

    /// Update half of a frame: advance the state and refresh the scene.
    pub fn step(&mut self) -> StepReport {
        let contacts = frame_step::step(&mut self.state, &self.viewport);
        self.frame += 1;
        self.contacts += contacts.len() as u64;
        self.scene.body.position = self.state.position;
        if !contacts.is_empty() {
            self.scene.body.color = self.palette.hex_at(self.state.cursor);
        }
        StepReport {
            frame: self.frame,
            contacts,
        }
    }

    /// Full frame: step, then render.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> StepReport {
        let report = self.step();
        renderer.render(&self.scene, &self.camera);
        report
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new(
            Viewport::default(),
            Palette::reference(),
            BODY_RADIUS,
            INITIAL_VELOCITY,
        )
    }
}
