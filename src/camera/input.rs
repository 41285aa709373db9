//! Device input → camera rig mutations.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::camera::rig::CameraRig;

/// Any of these starts a drag; releasing any of them ends it.
pub const DRAG_BUTTONS: [MouseButton; 3] =
    [MouseButton::Left, MouseButton::Right, MouseButton::Middle];
pub const RESET_KEY: KeyCode = KeyCode::Space;
/// Pixel equivalent of one wheel notch reported in line units.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Convert a wheel reading into a pixel delta where positive means "scroll
/// down / away from the screen", i.e. zoom out.
pub fn wheel_delta_y(unit: MouseScrollUnit, y: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => -y * PIXELS_PER_LINE,
        MouseScrollUnit::Pixel => -y,
    }
}

/// Idle/dragging transitions and drag rotation.
pub fn handle_pointer_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    mut rig: ResMut<CameraRig>,
) {
    if buttons.any_just_pressed(DRAG_BUTTONS) && !rig.is_dragging() {
        // Motion accumulated on the press frame happened before the button went down.
        rig.begin_drag();
        debug!("Camera drag started");
    } else if rig.is_dragging() && motion.delta != Vec2::ZERO {
        rig.on_drag_delta(motion.delta.x, motion.delta.y);
    }

    if buttons.any_just_released(DRAG_BUTTONS) && rig.is_dragging() {
        rig.end_drag();
        debug!("Camera drag ended");
    }
}

pub fn handle_wheel_zoom(scroll: Res<AccumulatedMouseScroll>, mut rig: ResMut<CameraRig>) {
    if scroll.delta.y == 0.0 {
        return;
    }
    rig.on_zoom(wheel_delta_y(scroll.unit, scroll.delta.y));
}

pub fn handle_reset_key(keys: Res<ButtonInput<KeyCode>>, mut rig: ResMut<CameraRig>) {
    if keys.just_pressed(RESET_KEY) {
        rig.reset();
        debug!("Camera reset to default view");
    }
}
