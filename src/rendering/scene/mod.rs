pub mod scene;
pub mod setup;

pub use scene::{AmbientLightSpec, BodyView, CameraRig, PointLightSpec, Scene};
pub use setup::SceneSetupPlugin;
