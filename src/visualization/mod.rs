//! Visualization module
//!
//! Meshes, materials and lights for the simulated bodies, plus the starfield
//! backdrop. Nothing here mutates simulation state.

use bevy::prelude::*;

use crate::orbital::spawn_bodies;

pub mod bodies;
pub mod lighting;
pub mod starfield;

pub use bodies::attach_body_visuals;
pub use lighting::spawn_lighting;
pub use starfield::spawn_starfield;

/// Plugin for rendering the solar system scene
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                attach_body_visuals.after(spawn_bodies),
                spawn_starfield,
                spawn_lighting,
            ),
        );
    }
}
