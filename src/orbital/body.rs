//! Orbital body components

use bevy::prelude::*;

/// Identity of a simulated body. Each variant owns exactly one entity.
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    pub const ALL: [BodyId; 9] = [
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }
}

/// Circular, coplanar orbit plus self-rotation.
///
/// `angle` and `spin` are the only mutable fields; both wrap implicitly since
/// every consumer goes through `sin`/`cos` or a quaternion.
#[derive(Component, Copy, Clone, Debug, PartialEq)]
pub struct OrbitalBody {
    pub orbital_radius: f32,
    /// Radians per tick at multiplier 1.0
    pub angular_speed: f32,
    /// Self-rotation radians per tick at multiplier 1.0
    pub spin_speed: f32,
    pub angle: f32,
    /// Accumulated rotation about the Y axis
    pub spin: f32,
}

impl OrbitalBody {
    pub fn planet(orbital_radius: f32, angular_speed: f32, spin_speed: f32, phase: f32) -> Self {
        debug_assert!(orbital_radius >= 0.0);
        debug_assert!(angular_speed > 0.0);
        Self {
            orbital_radius,
            angular_speed,
            spin_speed,
            angle: phase,
            spin: 0.0,
        }
    }

    /// The star sits at the origin and only spins.
    pub fn star(spin_speed: f32) -> Self {
        Self {
            orbital_radius: 0.0,
            angular_speed: 0.0,
            spin_speed,
            angle: 0.0,
            spin: 0.0,
        }
    }

    /// Position on the orbital plane (y = 0).
    pub fn position(&self) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new(cos * self.orbital_radius, 0.0, sin * self.orbital_radius)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.spin)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).with_rotation(self.rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_position_lies_on_orbital_plane() {
        let body = OrbitalBody::planet(43.0, 0.02, 0.018, PI);
        let pos = body.position();
        assert_abs_diff_eq!(pos.x, -43.0, epsilon = 1e-4);
        assert_eq!(pos.y, 0.0);
        assert_abs_diff_eq!(pos.z, 0.0, epsilon = 1e-4);

        let body = OrbitalBody::planet(60.0, 0.012, 0.04, FRAC_PI_2);
        assert_abs_diff_eq!(body.position().z, 60.0, epsilon = 1e-4);
    }

    #[test]
    fn test_star_stays_at_origin() {
        let mut star = OrbitalBody::star(0.005);
        star.angle = 1.3;
        assert_eq!(star.position(), Vec3::ZERO);
    }

    #[test]
    fn test_body_names_are_unique() {
        let mut names: Vec<_> = BodyId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BodyId::ALL.len());
    }
}
