//! User interface module
//!
//! The controls overlay is the only writer of `SimulationSpeed`.

use bevy::prelude::*;

pub mod panel;
pub mod theme;

pub use panel::{SpeedLabel, SpeedSlider, format_speed};
pub use theme::controls_theme;

use panel::{on_speed_slider_change, spawn_controls_panel, update_speed_label};

/// Plugin for the controls overlay. Expects `FeathersPlugins` to be added.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(controls_theme())
            .add_observer(on_speed_slider_change)
            .add_systems(Startup, spawn_controls_panel)
            .add_systems(Update, update_speed_label);
    }
}
