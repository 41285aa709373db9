//! Static starfield backdrop.

use bevy::light::NotShadowCaster;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::settings::{SceneSettings, StarfieldSettings};

#[derive(Component)]
pub struct Star;

/// Uniformly scatter `count` points in an axis-aligned cube of edge `extent`
/// centred on the origin. Same seed, same sky.
pub fn star_positions(settings: &StarfieldSettings) -> Vec<Vec3> {
    let half = settings.extent * 0.5;
    let mut rng = StdRng::seed_from_u64(settings.seed);
    (0..settings.count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    let starfield = &settings.starfield;
    if starfield.count == 0 || !(starfield.extent.is_finite() && starfield.extent > 0.0) {
        return;
    }

    // One shared low-poly mesh keeps all stars in a single batch.
    let mesh = meshes.add(Sphere::new(starfield.star_size * 0.5).mesh().ico(0).unwrap_or_else(
        |err| {
            warn!("Falling back to UV star mesh: {}", err);
            Sphere::new(starfield.star_size * 0.5).mesh().uv(4, 3)
        },
    ));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let positions = star_positions(starfield);
    let count = positions.len();
    commands.spawn_batch(positions.into_iter().map(move |position| {
        (
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            NotShadowCaster,
            Star,
        )
    }));
    info!("Spawned starfield with {} stars", count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_fill_the_cube() {
        let settings = StarfieldSettings {
            count: 500,
            extent: 200.0,
            ..Default::default()
        };
        let stars = star_positions(&settings);
        assert_eq!(stars.len(), 500);
        assert!(stars.iter().all(|p| p.abs().max_element() <= 100.0));
        // Not all bunched in one octant.
        assert!(stars.iter().any(|p| p.x < 0.0) && stars.iter().any(|p| p.x > 0.0));
    }

    #[test]
    fn test_seed_determines_sky() {
        let settings = StarfieldSettings {
            count: 64,
            ..Default::default()
        };
        assert_eq!(star_positions(&settings), star_positions(&settings));

        let other = StarfieldSettings {
            seed: settings.seed + 1,
            ..settings.clone()
        };
        assert_ne!(star_positions(&settings), star_positions(&other));
    }

    #[test]
    fn test_empty_starfield() {
        let settings = StarfieldSettings {
            count: 0,
            ..Default::default()
        };
        assert!(star_positions(&settings).is_empty());
    }
}
