pub mod demo;

pub use demo::DemoPlugin;
