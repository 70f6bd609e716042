use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;

use chroma_bounce::core::config::{ConfigReport, DemoConfig};
use chroma_bounce::simulation::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use chroma_bounce::DemoPlugin;

// ---------------- Config Loading ----------------

#[cfg(target_arch = "wasm32")]
fn load_config() -> (DemoConfig, ConfigReport) {
    // Embedded base layer only; no local override on wasm.
    const RAW: &str = include_str!("../assets/config/demo.ron");
    let (cfg, issues) = match ron::from_str(RAW) {
        Ok(cfg) => (cfg, Vec::new()),
        Err(e) => (DemoConfig::default(), vec![format!("embedded demo.ron: parse error: {e}")]),
    };
    let report = ConfigReport::new(&cfg, vec!["embedded demo.ron".into()], issues);
    (cfg, report)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> (DemoConfig, ConfigReport) {
    let (cfg, used, issues) =
        DemoConfig::load_with_override("assets/config/demo.ron", "assets/config/demo.local.ron");
    let report = ConfigReport::new(&cfg, used, issues);
    (cfg, report)
}

// ---------------- Main ----------------

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let (cfg, report) = load_config();
    let level = cfg.log_level().unwrap_or(Level::INFO);

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: WindowResolution::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    filter: cfg.logging.filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(DemoPlugin)
        .run();
}
