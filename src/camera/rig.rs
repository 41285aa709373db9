//! Spherical camera rig around the origin.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// Radians of yaw/pitch per pixel of pointer motion.
pub const DRAG_SENSITIVITY: f32 = 0.01;
/// Distance units per pixel of wheel delta.
pub const ZOOM_SENSITIVITY: f32 = 0.1;
pub const MIN_DISTANCE: f32 = 10.0;
pub const MAX_DISTANCE: f32 = 200.0;
pub const DEFAULT_DISTANCE: f32 = 50.0;
pub const MIN_PITCH: f32 = -FRAC_PI_2;
pub const MAX_PITCH: f32 = FRAC_PI_2;
/// Added to the eye height after the pitch projection; keeps the default
/// view above the orbital plane.
pub const EYE_HEIGHT_OFFSET: f32 = 10.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Eye placement handed to the renderer each frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EyeTransform {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl EyeTransform {
    pub fn to_transform(self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

/// Camera state. `pitch` and `distance` are clamped whenever they change, so
/// an out-of-range value is never observable.
#[derive(Resource, Copy, Clone, Debug, PartialEq)]
pub struct CameraRig {
    yaw: f32,
    pitch: f32,
    distance: f32,
    drag: DragState,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
            drag: DragState::Idle,
        }
    }
}

impl CameraRig {
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn begin_drag(&mut self) {
        self.drag = DragState::Dragging;
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Rotate by a pointer delta in pixels. No-op unless a drag is active.
    pub fn on_drag_delta(&mut self, dx: f32, dy: f32) {
        if !self.is_dragging() || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.yaw += dx * DRAG_SENSITIVITY;
        self.pitch = (self.pitch + dy * DRAG_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Positive `delta_y` (scroll down / away) moves the eye outward.
    pub fn on_zoom(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        self.distance =
            (self.distance + delta_y * ZOOM_SENSITIVITY).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Restore the default view. The drag state is left as is.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.distance = DEFAULT_DISTANCE;
    }

    pub fn eye_transform(&self) -> EyeTransform {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        EyeTransform {
            position: Vec3::new(
                cos_yaw * self.distance,
                self.pitch.sin() * self.distance + EYE_HEIGHT_OFFSET,
                sin_yaw * self.distance,
            ),
            look_at: Vec3::ZERO,
        }
    }
}
