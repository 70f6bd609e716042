// This file is part of Chroma Bounce.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::ConfigReportPlugin;
use crate::core::system::{FrameStepSet, PostFrameSet};
use crate::debug::DebugPlugin;
use crate::rendering::scene::SceneSetupPlugin;
use crate::session::AutoClosePlugin;
use crate::simulation::AnimationLoopPlugin;

/// Everything the demo needs on top of Bevy's `DefaultPlugins`.
pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (FrameStepSet, PostFrameSet.after(FrameStepSet)))
            .add_plugins((
                ConfigReportPlugin,
                AnimationLoopPlugin,
                SceneSetupPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ));
    }
}
