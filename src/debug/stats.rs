use super::state::DebugState;
use crate::simulation::WallContact;
use bevy::prelude::*;

pub fn debug_contact_stats_system(
    mut state: ResMut<DebugState>,
    mut ev_contact: EventReader<WallContact>,
) {
    let mut prev_frame = None;
    for c in ev_contact.read() {
        let same_frame = prev_frame == Some(c.frame);
        state.record_contact(c.wall, same_frame);
        prev_frame = Some(c.frame);
        debug!(
            target: "sim",
            frame = c.frame,
            axis = ?c.axis,
            wall = ?c.wall,
            color_index = c.color_index,
            "wall contact"
        );
        if same_frame {
            debug!(target: "sim", frame = c.frame, "corner hit: both axes reflected");
        }
    }
}
