use super::state::DebugState;
use crate::simulation::AnimationLoop;
use bevy::prelude::*;

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    anim: Res<AnimationLoop>,
) {
    if state.log_interval <= 0.0 {
        return;
    }
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        let s = anim.state();
        info!(
            target: "sim",
            "SIM frame={} t={:.3}s pos=({:.1},{:.1}) vel=({},{}) color={}/{} contacts={} corners={} last_wall={:?}",
            anim.frame_count(),
            time.elapsed_secs(),
            s.position.x,
            s.position.y,
            s.velocity.x,
            s.velocity.y,
            s.color_index(),
            anim.palette().len(),
            state.contacts_seen,
            state.corner_hits,
            state.last_wall
        );
    }
}
