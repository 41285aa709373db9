//! Per-tick orbit integration
//!
//! Stepping is frame-count based: every scheduled tick advances each body by a
//! fixed `speed * multiplier`, independent of wall-clock frame time.

use bevy::prelude::*;

use crate::orbital::body::OrbitalBody;
use crate::orbital::speed::SimulationSpeed;

/// Advance every body by one tick at `multiplier`.
///
/// Bodies are independent, so iteration order is irrelevant. A zero
/// multiplier leaves all state untouched; a negative one runs time backwards.
pub fn advance<'a>(bodies: impl IntoIterator<Item = &'a mut OrbitalBody>, multiplier: f32) {
    for body in bodies {
        body.angle += body.angular_speed * multiplier;
        body.spin += body.spin_speed * multiplier;
    }
}

/// System: integrate all bodies once using the current slider multiplier.
pub fn integrate_orbits(speed: Res<SimulationSpeed>, mut bodies: Query<&mut OrbitalBody>) {
    if speed.is_paused() {
        // Skip touching components so change detection stays quiet while paused.
        return;
    }
    advance(bodies.iter_mut().map(Mut::into_inner), speed.get());
}
