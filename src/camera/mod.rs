//! Orbiting camera module
//!
//! A yaw/pitch/distance rig around the origin, driven by pointer drag, the
//! mouse wheel and a reset key.

use bevy::prelude::*;

use crate::core::frame::{FrameSet, FrameSnapshot};

pub mod input;
pub mod rig;

pub use input::{handle_pointer_drag, handle_reset_key, handle_wheel_zoom};
pub use rig::{CameraRig, DragState, EyeTransform};

/// Marker for the camera driven by the rig
#[derive(Component)]
pub struct MainCamera;

/// Plugin for the camera rig and its input handling
pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(
                Update,
                (handle_pointer_drag, handle_wheel_zoom, handle_reset_key)
                    .chain()
                    .in_set(FrameSet::Input),
            )
            .add_systems(Update, capture_eye_transform.in_set(FrameSet::Camera));
    }
}

/// Derive this frame's eye placement from the rig.
pub fn capture_eye_transform(rig: Res<CameraRig>, mut snapshot: ResMut<FrameSnapshot>) {
    snapshot.eye = rig.eye_transform();
}
