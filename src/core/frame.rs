//! Per-frame update pipeline.
//!
//! Every `Update` run is one tick: read input, integrate bodies, derive the
//! eye, then present the resulting transforms. The stages are chained, so a
//! tick always completes before the next one starts. The app runner decides
//! when the next tick happens (display refresh in the binary, a plain
//! `app.update()` loop in tests).

use bevy::prelude::*;

use crate::camera::{EyeTransform, MainCamera};
use crate::orbital::{BodyId, OrbitalBody};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Integrate,
    Camera,
    Present,
}

/// One body's render transform for the current frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyFrame {
    pub entity: Entity,
    pub id: BodyId,
    pub position: Vec3,
    pub rotation_y: f32,
}

/// Everything the renderer consumes for one frame.
#[derive(Resource, Clone, Debug)]
pub struct FrameSnapshot {
    pub bodies: Vec<BodyFrame>,
    pub eye: EyeTransform,
}

impl Default for FrameSnapshot {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            eye: EyeTransform {
                position: Vec3::ZERO,
                look_at: Vec3::ZERO,
            },
        }
    }
}

impl FrameSnapshot {
    pub fn body(&self, id: BodyId) -> Option<&BodyFrame> {
        self.bodies.iter().find(|frame| frame.id == id)
    }
}

pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameSnapshot>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Integrate,
                    FrameSet::Camera,
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    collect_body_frames,
                    (present_bodies, present_camera),
                )
                    .chain()
                    .in_set(FrameSet::Present),
            );
    }
}

fn collect_body_frames(
    bodies: Query<(Entity, &BodyId, &OrbitalBody)>,
    mut snapshot: ResMut<FrameSnapshot>,
) {
    snapshot.bodies.clear();
    snapshot
        .bodies
        .extend(bodies.iter().map(|(entity, id, body)| BodyFrame {
            entity,
            id: *id,
            position: body.position(),
            rotation_y: body.spin,
        }));
}

fn present_bodies(
    snapshot: Res<FrameSnapshot>,
    mut transforms: Query<&mut Transform, With<BodyId>>,
) {
    for frame in &snapshot.bodies {
        let Ok(mut transform) = transforms.get_mut(frame.entity) else {
            continue;
        };
        transform.translation = frame.position;
        transform.rotation = Quat::from_rotation_y(frame.rotation_y);
    }
}

fn present_camera(
    snapshot: Res<FrameSnapshot>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = cameras.single_mut() else {
        warn!("present_camera: main camera not found");
        return;
    };
    *transform = snapshot.eye.to_transform();
}
