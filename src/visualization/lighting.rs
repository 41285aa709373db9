//! Scene lighting: the sun as a point light plus dim ambient fill.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Light reaches a bit past the outermost orbit.
pub const SUN_LIGHT_RANGE: f32 = 200.0;
const SUN_LIGHT_INTENSITY: f32 = 40_000_000.0;

/// Marker component for the sun's point light
#[derive(Component)]
pub struct SunLight;

pub fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: 80.0,
        ..default()
    });

    // Sits inside the sun mesh, which is unlit and does not cast shadows.
    commands.spawn((
        PointLight {
            intensity: SUN_LIGHT_INTENSITY,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        SunLight,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Name::new("Sun light"),
    ));
}
