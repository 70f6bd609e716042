//! Debug module: feature gated stats & periodic logging of the animation loop.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod state;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use state::DebugState;

#[cfg(feature = "debug")]
use crate::core::config::DemoConfig;
#[cfg(feature = "debug")]
use crate::core::system::PostFrameSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        use stats::debug_contact_stats_system;

        app.init_resource::<DebugState>()
            .add_systems(Startup, apply_debug_config)
            .add_systems(
                Update,
                (debug_contact_stats_system, debug_logging_system)
                    .chain()
                    .in_set(PostFrameSet),
            );
    }
}

#[cfg(feature = "debug")]
fn apply_debug_config(cfg: Option<Res<DemoConfig>>, mut state: ResMut<DebugState>) {
    if let Some(cfg) = cfg {
        state.log_interval = cfg.debug.log_interval;
    }
}

// Stub plugin when debug feature disabled so callers can add it unconditionally.
#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
