pub mod config;
pub mod report;

pub use config::{DebugConfig, DemoConfig, LoggingConfig, WindowConfig};
pub use report::{ConfigReport, ConfigReportPlugin};
