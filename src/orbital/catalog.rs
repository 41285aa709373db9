//! Static catalog of the simulated bodies and their startup spawn.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::orbital::body::{BodyId, OrbitalBody};

/// Saturn's ring, in the planet's local frame.
#[derive(Copy, Clone, Debug)]
pub struct RingSpec {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Color,
    pub opacity: f32,
}

/// Everything needed to spawn and draw one body.
#[derive(Copy, Clone, Debug)]
pub struct BodySpec {
    pub id: BodyId,
    pub orbital_radius: f32,
    pub angular_speed: f32,
    pub spin_speed: f32,
    pub initial_phase: f32,
    /// Rendered sphere radius (scene units, not to scale with orbits)
    pub visual_radius: f32,
    pub color: Color,
    pub ring: Option<RingSpec>,
}

impl BodySpec {
    pub fn is_star(&self) -> bool {
        self.orbital_radius == 0.0
    }

    pub fn orbital_body(&self) -> OrbitalBody {
        if self.is_star() {
            OrbitalBody::star(self.spin_speed)
        } else {
            OrbitalBody::planet(
                self.orbital_radius,
                self.angular_speed,
                self.spin_speed,
                self.initial_phase,
            )
        }
    }
}

const fn hex(rgb: u32) -> Color {
    Color::srgb(
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
    )
}

const fn planet(
    id: BodyId,
    orbital_radius: f32,
    angular_speed: f32,
    spin_speed: f32,
    initial_phase: f32,
    visual_radius: f32,
    color: u32,
) -> BodySpec {
    BodySpec {
        id,
        orbital_radius,
        angular_speed,
        spin_speed,
        initial_phase,
        visual_radius,
        color: hex(color),
        ring: None,
    }
}

// Planet radii are relative to Earth = 1.0; the sun is scaled down to fit.
pub static BODIES: [BodySpec; 9] = [
    BodySpec {
        id: BodyId::Sun,
        orbital_radius: 0.0,
        angular_speed: 0.0,
        spin_speed: 0.005,
        initial_phase: 0.0,
        visual_radius: 15.0,
        color: hex(0xFFDD55),
        ring: None,
    },
    planet(BodyId::Mercury, 20.0, 0.040, 0.030, 7.0 * PI / 4.0, 0.38, 0x8C7853),
    planet(BodyId::Venus, 28.0, 0.032, 0.015, PI / 4.0, 0.95, 0xFFA500),
    planet(BodyId::Earth, 35.0, 0.025, 0.020, 2.0 * PI / 3.0, 1.0, 0x4169E1),
    planet(BodyId::Mars, 43.0, 0.020, 0.018, PI, 0.53, 0xFF4500),
    planet(BodyId::Jupiter, 60.0, 0.012, 0.040, PI / 2.0, 5.6, 0xDAA520),
    BodySpec {
        ring: Some(RingSpec {
            inner_radius: 6.5,
            outer_radius: 10.0,
            color: hex(0xC0C0C0),
            opacity: 0.7,
        }),
        ..planet(BodyId::Saturn, 80.0, 0.009, 0.038, 5.0 * PI / 4.0, 4.7, 0xFAD5A5)
    },
    planet(BodyId::Uranus, 100.0, 0.006, 0.025, PI / 3.0, 2.0, 0x4FD0E7),
    planet(BodyId::Neptune, 120.0, 0.004, 0.020, PI / 6.0, 1.94, 0x4169E1),
];

pub fn spec_for(id: BodyId) -> &'static BodySpec {
    // Catalog order matches BodyId::ALL.
    &BODIES[id as usize]
}

/// Startup: spawn one simulation entity per catalog entry.
///
/// Meshes and materials are attached separately by the visualization plugin,
/// so this runs headless.
pub fn spawn_bodies(mut commands: Commands) {
    for spec in &BODIES {
        let body = spec.orbital_body();
        commands.spawn((
            spec.id,
            body,
            body.transform(),
            Visibility::Visible,
            Name::new(spec.id.name()),
        ));
    }
    info!("Spawned {} orbital bodies", BODIES.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_catalog_order_matches_body_ids() {
        for (spec, id) in BODIES.iter().zip(BodyId::ALL) {
            assert_eq!(spec.id, id);
            assert_eq!(spec_for(id).id, id);
        }
    }

    #[test]
    fn test_only_the_sun_is_a_star() {
        let stars: Vec<_> = BODIES.iter().filter(|s| s.is_star()).map(|s| s.id).collect();
        assert_eq!(stars, vec![BodyId::Sun]);
        assert_eq!(spec_for(BodyId::Sun).orbital_body().position(), Vec3::ZERO);
    }

    #[test]
    fn test_planet_phases_are_offset_and_distinct() {
        let phases: Vec<f32> = BODIES
            .iter()
            .filter(|s| !s.is_star())
            .map(|s| s.initial_phase.rem_euclid(TAU))
            .collect();
        for (i, a) in phases.iter().enumerate() {
            assert!(*a > 0.0, "planet {} starts at phase zero", i);
            for b in &phases[i + 1..] {
                assert!((a - b).abs() > 1e-3);
            }
        }
    }

    #[test]
    fn test_orbits_grow_outward_and_slow_down() {
        let planets: Vec<_> = BODIES.iter().filter(|s| !s.is_star()).collect();
        for pair in planets.windows(2) {
            assert!(pair[0].orbital_radius < pair[1].orbital_radius);
            assert!(pair[0].angular_speed > pair[1].angular_speed);
        }
    }

    #[test]
    fn test_only_saturn_has_rings() {
        for spec in &BODIES {
            assert_eq!(spec.ring.is_some(), spec.id == BodyId::Saturn);
        }
    }
}
