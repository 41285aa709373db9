//! Orbital simulation module
//!
//! Circular, coplanar orbits advanced by a fixed step per frame and scaled by
//! the user-controlled simulation speed.

use bevy::prelude::*;

use crate::core::frame::FrameSet;

pub mod body;
pub mod catalog;
pub mod integrator;
pub mod speed;

pub use body::{BodyId, OrbitalBody};
pub use catalog::{BODIES, BodySpec, RingSpec, spawn_bodies, spec_for};
pub use integrator::{advance, integrate_orbits};
pub use speed::SimulationSpeed;

/// Plugin for orbital bodies and their per-frame integration
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationSpeed>()
            .add_systems(Startup, spawn_bodies)
            .add_systems(Update, integrate_orbits.in_set(FrameSet::Integrate));
    }
}
