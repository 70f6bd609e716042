pub mod palette;
pub mod presenter;
pub mod renderer;
pub mod scene;

pub use renderer::{FrameRecord, NullRenderer, RecordingRenderer, Renderer};
