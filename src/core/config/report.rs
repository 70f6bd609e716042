use bevy::prelude::*;

use super::config::DemoConfig;

/// Outcome of loading [`DemoConfig`] before the app (and its logger) existed.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigReport {
    pub fn new(cfg: &DemoConfig, used: Vec<String>, issues: Vec<String>) -> Self {
        Self {
            used,
            issues,
            warnings: cfg.validate(),
        }
    }
}

/// Replays the load report through the log once logging is up.
pub struct ConfigReportPlugin;

impl Plugin for ConfigReportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigReport>()
            .add_systems(Startup, log_config_report);
    }
}

fn log_config_report(report: Res<ConfigReport>, cfg: Option<Res<DemoConfig>>) {
    for e in &report.issues {
        warn!(target: "config", "CONFIG LOAD ISSUE: {e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
    if report.used.is_empty() {
        info!(target: "config", "No config layers found; using defaults");
    } else {
        info!(target: "config", used = ?report.used, "Config layers loaded");
    }
    if let Some(cfg) = cfg {
        info!(target: "config", window = ?cfg.window, "Window config");
    }
}
