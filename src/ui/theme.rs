//! Feathers theme for the controls overlay.

use bevy::prelude::*;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;

/// Feathers initializes `UiTheme` but does not populate it; without this many
/// widgets render with the "missing token" fallback colour.
pub fn controls_theme() -> UiTheme {
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    theme.set_color("feathers.slider.bg", Color::srgba(0.12, 0.1, 0.06, 0.9));
    theme.set_color("feathers.slider.bar", Color::srgba(0.95, 0.7, 0.2, 0.75));
    theme.set_color(
        "feathers.slider.bar.disabled",
        Color::srgba(0.35, 0.28, 0.12, 0.45),
    );
    theme.set_color("feathers.slider.text", Color::srgba(1.0, 0.95, 0.85, 0.95));
    theme.set_color(
        "feathers.slider.text.disabled",
        Color::srgba(0.6, 0.55, 0.45, 0.7),
    );
    theme
}
