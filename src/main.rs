use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_feathers::FeathersPlugins;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod camera;
mod core;
mod orbital;
mod ui;
mod visualization;

use camera::{CameraRig, CameraRigPlugin, MainCamera};
use crate::core::{FramePlugin, SceneSettings, SettingsPlugin};
use orbital::OrbitalPlugin;
use ui::UiPlugin;
use visualization::VisualizationPlugin;

// Setup the main camera; the frame pipeline moves it every tick.
pub fn setup(mut commands: Commands, settings: Res<SceneSettings>, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.field_of_view_deg.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        MainCamera,
        Tonemapping::TonyMcMapface,
        rig.eye_transform().to_transform(),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            // Ties the frame loop to display refresh.
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(FeathersPlugins);

    // Loads settings, so it must come after the log plugin.
    app.add_plugins(SettingsPlugin);
    app.add_plugins(FramePlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(CameraRigPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
