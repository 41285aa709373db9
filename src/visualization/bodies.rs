//! Meshes and materials for the star, planets and Saturn's ring.

use std::f32::consts::FRAC_PI_2;

use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::core::settings::SceneSettings;
use crate::orbital::{BodyId, BodySpec, RingSpec, spec_for};

const SUN_GLOW_RADIUS: f32 = 6.0;
const SUN_GLOW_COLOR: Color = Color::srgba(1.0, 0xAA as f32 / 255.0, 0.0, 0.3);

/// Marker for the translucent shell around the sun
#[derive(Component)]
pub struct SunGlow;

/// Marker for a planetary ring mesh
#[derive(Component)]
pub struct PlanetRing;

/// Sphere subdivisions scale with apparent size so small planets stay cheap.
fn sphere_resolution(visual_radius: f32) -> (u32, u32) {
    match visual_radius {
        r if r >= 10.0 => (128, 128),
        r if r >= 4.0 => (32, 32),
        r if r >= 0.9 => (20, 20),
        _ => (16, 16),
    }
}

/// Startup: give every spawned body its mesh and material.
pub fn attach_body_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
    bodies: Query<(Entity, &BodyId)>,
) {
    for (entity, id) in &bodies {
        let spec = spec_for(*id);
        let (sectors, stacks) = sphere_resolution(spec.visual_radius);
        let mesh = meshes.add(Sphere::new(spec.visual_radius).mesh().uv(sectors, stacks));

        if spec.is_star() {
            let texture: Option<Handle<Image>> = settings
                .sun_texture
                .as_ref()
                .map(|path| asset_server.load(path.clone()));
            let material = materials.add(StandardMaterial {
                // A texture carries its own colour; don't tint it.
                base_color: if texture.is_some() { Color::WHITE } else { spec.color },
                base_color_texture: texture,
                unlit: true,
                ..default()
            });
            commands
                .entity(entity)
                .insert((Mesh3d(mesh), MeshMaterial3d(material), NotShadowCaster))
                .with_child(sun_glow(&mut meshes, &mut materials));
            continue;
        }

        let material = materials.add(StandardMaterial {
            base_color: spec.color,
            perceptual_roughness: 0.8,
            ..default()
        });
        commands
            .entity(entity)
            .insert((Mesh3d(mesh), MeshMaterial3d(material)));

        if let Some(ring) = spec.ring {
            commands
                .entity(entity)
                .with_child(planet_ring(spec, &ring, &mut meshes, &mut materials));
        }
    }
}

fn sun_glow(
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> impl Bundle {
    (
        Mesh3d(meshes.add(Sphere::new(SUN_GLOW_RADIUS).mesh().uv(128, 128))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SUN_GLOW_COLOR,
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            // Render the inside faces only.
            cull_mode: Some(bevy::render::render_resource::Face::Front),
            ..default()
        })),
        NotShadowCaster,
        SunGlow,
        Name::new("Sun glow"),
    )
}

fn planet_ring(
    spec: &BodySpec,
    ring: &RingSpec,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> impl Bundle {
    (
        Mesh3d(meshes.add(Annulus::new(ring.inner_radius, ring.outer_radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: ring.color.with_alpha(ring.opacity),
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        // The annulus mesh faces +Z; lay it flat in the planet's equator.
        Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        NotShadowCaster,
        PlanetRing,
        Name::new(format!("{} ring", spec.id.name())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::BODIES;

    #[test]
    fn test_resolution_tracks_size() {
        assert_eq!(sphere_resolution(spec_for(BodyId::Sun).visual_radius), (128, 128));
        assert_eq!(sphere_resolution(spec_for(BodyId::Jupiter).visual_radius), (32, 32));
        assert_eq!(sphere_resolution(spec_for(BodyId::Earth).visual_radius), (20, 20));
        assert_eq!(sphere_resolution(spec_for(BodyId::Mercury).visual_radius), (16, 16));
    }

    #[test]
    fn test_ring_clears_its_planet() {
        for spec in &BODIES {
            if let Some(ring) = spec.ring {
                assert!(ring.inner_radius > spec.visual_radius);
                assert!(ring.outer_radius > ring.inner_radius);
            }
        }
    }
}
