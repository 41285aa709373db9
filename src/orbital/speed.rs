//! Simulation speed multiplier

use bevy::prelude::*;

pub const MIN_SPEED: f32 = 0.0;
pub const MAX_SPEED: f32 = 5.0;

/// Multiplier applied to every per-tick advance. Written by the controls
/// panel, read by the integrator.
#[derive(Resource, Copy, Clone, Debug, PartialEq)]
pub struct SimulationSpeed(f32);

impl SimulationSpeed {
    pub fn new(value: f32) -> Self {
        let mut speed = Self(1.0);
        speed.set(value);
        speed
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Clamp into the slider range. Non-finite values are ignored.
    pub fn set(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        self.0 = value.clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn is_paused(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_is_clamped_to_slider_range() {
        assert_eq!(SimulationSpeed::new(7.5).get(), MAX_SPEED);
        assert_eq!(SimulationSpeed::new(-1.0).get(), MIN_SPEED);
        assert_eq!(SimulationSpeed::new(2.3).get(), 2.3);
    }

    #[test]
    fn test_non_finite_speed_keeps_previous_value() {
        let mut speed = SimulationSpeed::new(3.0);
        speed.set(f32::NAN);
        speed.set(f32::INFINITY);
        assert_eq!(speed.get(), 3.0);
    }

    #[test]
    fn test_default_is_real_time_and_zero_pauses() {
        assert_eq!(SimulationSpeed::default().get(), 1.0);
        assert!(SimulationSpeed::new(0.0).is_paused());
    }
}
