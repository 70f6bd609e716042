//! Single logical frame step: integrate, test walls, reflect, recolor, clamp.
//!
//! No delta-time: one call is one fixed step. Axis checks are independent and
//! evaluated x before y, so a corner hit produces two contacts in one frame.

use bevy::prelude::*;
use smallvec::SmallVec;

use super::viewport::Viewport;
use crate::rendering::palette::PaletteCursor;

pub const BODY_RADIUS: f32 = 20.0;
pub const INITIAL_VELOCITY: Vec2 = Vec2::new(5.0, 5.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Evaluation order within a frame.
    pub const ORDER: [Axis; 2] = [Axis::X, Axis::Y];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Left,
    Right,
    Bottom,
    Top,
}

impl Wall {
    fn from_axis(axis: Axis, side: f32) -> Self {
        match (axis, side >= 0.0) {
            (Axis::X, true) => Wall::Right,
            (Axis::X, false) => Wall::Left,
            (Axis::Y, true) => Wall::Top,
            (Axis::Y, false) => Wall::Bottom,
        }
    }
}

/// One axis check that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub axis: Axis,
    pub wall: Wall,
    /// Palette index selected by this contact.
    pub color_index: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// 1-based number of the frame that produced this report.
    pub frame: u64,
    pub contacts: SmallVec<[Contact; 2]>,
}

impl StepReport {
    pub fn is_corner_hit(&self) -> bool {
        self.contacts.len() == 2
    }
}

/// Everything that changes between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceState {
    pub position: Vec3,
    pub velocity: Vec2,
    pub radius: f32,
    pub cursor: PaletteCursor,
}

impl BounceState {
    pub fn color_index(&self) -> usize {
        self.cursor.index()
    }
}

/// Advances `state` by one step inside `viewport`, returning the contacts that fired.
pub fn step(state: &mut BounceState, viewport: &Viewport) -> SmallVec<[Contact; 2]> {
    state.position.x += state.velocity.x;
    state.position.y += state.velocity.y;

    let half = viewport.half_extents();
    let limit = viewport.clamp_extents(state.radius);
    let mut contacts = SmallVec::new();
    for axis in Axis::ORDER {
        let i = axis.index();
        let p = state.position[i];
        if p.abs() + state.radius > half[i] {
            state.velocity[i] = -state.velocity[i];
            let color_index = state.cursor.advance();
            state.position[i] = p.signum() * limit[i];
            contacts.push(Contact {
                axis,
                wall: Wall::from_axis(axis, p),
                color_index,
            });
        }
    }
    contacts
}
