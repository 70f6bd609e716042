//! Host-shell configuration: window/session, logging, debug cadence.
//! Layered RON loading with validation warnings (non-fatal). The simulation
//! constants are not configurable.

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Exit after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chroma Bounce".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace|debug|info|warn|error.
    pub level: String,
    /// `EnvFilter`-style directives appended to the level.
    pub filter: String,
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            filter: "wgpu=error,naga=warn".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Seconds between summary log lines.
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self { log_interval: 2.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub debug: DebugConfig,
}

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Base layer plus an optional local override. The override is skipped
    /// only when it does not exist; any other failure is reported.
    pub fn load_with_override(
        base: impl AsRef<Path>,
        local: impl AsRef<Path>,
    ) -> (Self, Vec<String>, Vec<String>) {
        let local = local.as_ref();
        if local.exists() {
            Self::load_layered([base.as_ref(), local])
        } else {
            Self::load_layered([base.as_ref()])
        }
    }

    /// Deep-merges every readable layer in order (later wins) and deserializes
    /// the result. Returns the config, the layers used, and per-layer issues.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        match existing {
                            Some(ev) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (Self::default(), used, errors);
        };
        match val.into_rust::<DemoConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (Self::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.title.trim().is_empty() {
            w.push("window.title is empty".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.log_level().is_none() {
            w.push(format!(
                "logging.level '{}' not recognized; falling back to info",
                self.logging.level
            ));
        }
        if self.debug.log_interval <= 0.0 {
            w.push(format!(
                "debug.log_interval {} must be > 0; summary logging disabled",
                self.debug.log_interval
            ));
        }
        w
    }

    /// Parsed `logging.level`, `None` when unrecognized.
    pub fn log_level(&self) -> Option<bevy::log::Level> {
        self.logging.level.trim().parse().ok()
    }
}
