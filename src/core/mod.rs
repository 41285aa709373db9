//! Frame scheduling and scene configuration shared by every other module.

pub mod frame;
pub mod settings;

pub use frame::{FramePlugin, FrameSet, FrameSnapshot};
pub use settings::{SceneSettings, SettingsPlugin};
