use bevy::prelude::*;

use crate::core::config::DebugConfig;
use crate::simulation::Wall;

#[derive(Resource, Debug)]
pub struct DebugState {
    /// Seconds between summary lines; <= 0 disables them.
    pub log_interval: f32,
    pub time_accum: f32,
    pub contacts_seen: u64,
    pub corner_hits: u64,
    pub last_wall: Option<Wall>,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: DebugConfig::default().log_interval,
            time_accum: 0.0,
            contacts_seen: 0,
            corner_hits: 0,
            last_wall: None,
        }
    }
}

impl DebugState {
    /// `corner` marks the second contact of a frame.
    pub fn record_contact(&mut self, wall: Wall, corner: bool) {
        self.contacts_seen += 1;
        self.last_wall = Some(wall);
        if corner {
            self.corner_hits += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_matches_config_default() {
        assert_eq!(
            DebugState::default().log_interval,
            DebugConfig::default().log_interval
        );
    }

    #[test]
    fn second_contact_of_frame_counts_as_corner() {
        let mut s = DebugState::default();
        s.record_contact(Wall::Right, false);
        s.record_contact(Wall::Top, true);
        assert_eq!(s.contacts_seen, 2);
        assert_eq!(s.corner_hits, 1);
        assert_eq!(s.last_wall, Some(Wall::Top));
    }
}
