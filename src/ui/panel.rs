//! Controls overlay: simulation speed slider and input help.

use bevy::prelude::*;
use bevy_feathers::controls::{SliderProps, slider};
use bevy_ui_widgets::{SliderPrecision, SliderStep, SliderValue, ValueChange};

use crate::orbital::SimulationSpeed;
use crate::orbital::speed::{MAX_SPEED, MIN_SPEED};

pub const SPEED_STEP: f32 = 0.1;

const HELP_LINES: [&str; 3] = [
    "- Drag to rotate view",
    "- Scroll to zoom",
    "- Spacebar to reset camera",
];

/// Marker for the speed slider widget
#[derive(Component)]
pub struct SpeedSlider;

/// Marker for the "Speed: 1.0x" text
#[derive(Component)]
pub struct SpeedLabel;

pub fn format_speed(speed: f32) -> String {
    format!("{:.1}x", speed)
}

fn label(text: impl Into<String>, font_size: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::WHITE),
    )
}

pub fn spawn_controls_panel(mut commands: Commands, speed: Res<SimulationSpeed>) {
    let help = HELP_LINES.join("\n");

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            left: Val::Px(20.0),
            padding: UiRect::all(Val::Px(15.0)),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(5.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        GlobalZIndex(100),
        Name::new("Controls panel"),
        children![
            label("Controls", 16.0),
            (
                label(format!("Speed: {}", format_speed(speed.get())), 14.0),
                SpeedLabel,
            ),
            (
                Node {
                    width: Val::Px(200.0),
                    ..default()
                },
                children![slider(
                    SliderProps {
                        value: speed.get(),
                        min: MIN_SPEED,
                        max: MAX_SPEED,
                        ..default()
                    },
                    (SpeedSlider, SliderStep(SPEED_STEP), SliderPrecision(1)),
                )],
            ),
            label(help, 12.0),
        ],
    ));
}

/// Observer: the slider reports a new value; store it and move the thumb.
pub fn on_speed_slider_change(
    change: On<ValueChange<f32>>,
    sliders: Query<(), With<SpeedSlider>>,
    mut speed: ResMut<SimulationSpeed>,
    mut commands: Commands,
) {
    if !sliders.contains(change.source) {
        return;
    }
    speed.set(change.value);
    commands.entity(change.source).insert(SliderValue(speed.get()));
    debug!("Simulation speed set to {}", format_speed(speed.get()));
}

pub fn update_speed_label(
    speed: Res<SimulationSpeed>,
    mut labels: Query<&mut Text, With<SpeedLabel>>,
) {
    if !speed.is_changed() {
        return;
    }
    for mut text in &mut labels {
        text.0 = format!("Speed: {}", format_speed(speed.get()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_label_has_one_decimal() {
        assert_eq!(format_speed(1.0), "1.0x");
        assert_eq!(format_speed(0.0), "0.0x");
        assert_eq!(format_speed(2.345), "2.3x");
        assert_eq!(format_speed(5.0), "5.0x");
    }

    #[test]
    fn test_label_follows_speed_resource() {
        let mut app = App::new();
        app.insert_resource(SimulationSpeed::new(1.0))
            .add_systems(Update, update_speed_label);
        let entity = app.world_mut().spawn((Text::new("Speed: 1.0x"), SpeedLabel)).id();

        app.world_mut().resource_mut::<SimulationSpeed>().set(3.5);
        app.update();
        let text = app.world().get::<Text>(entity).expect("label missing");
        assert_eq!(text.0, "Speed: 3.5x");
    }
}
