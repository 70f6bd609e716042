//! Render capability consumed by the animation loop.
//!
//! The loop only ever calls `render(scene, camera)`; the Bevy presenter and the
//! in-memory renderers below are interchangeable behind this trait.

use serde::Serialize;

use super::scene::{CameraRig, Scene};

pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &CameraRig);
}

/// Discards frames, counting them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer {
    pub frames: u64,
}

impl Renderer for NullRenderer {
    fn render(&mut self, _scene: &Scene, _camera: &CameraRig) {
        self.frames += 1;
    }
}

/// Serializable snapshot of one rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub position: [f32; 3],
    pub color: String,
}

/// Keeps every `every`-th rendered frame (1 = all).
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    every: u64,
    rendered: u64,
    pub records: Vec<FrameRecord>,
}

impl RecordingRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            rendered: 0,
            records: Vec::new(),
        }
    }

    pub fn rendered(&self) -> u64 {
        self.rendered
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, scene: &Scene, _camera: &CameraRig) {
        self.rendered += 1;
        if self.rendered % self.every != 0 {
            return;
        }
        let p = scene.body.position;
        self.records.push(FrameRecord {
            frame: self.rendered,
            position: [p.x, p.y, p.z],
            color: format!("#{:06x}", scene.body.color),
        });
    }
}
