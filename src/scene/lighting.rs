//! Lighting setup

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::config::SceneConfig;

/// Marker component for the sun directional light
#[derive(Component)]
pub struct SunLight;

/// Dim grey ambient fill plus one directional "sun" aimed at Earth
pub fn spawn_lights(mut commands: Commands, config: Res<SceneConfig>) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb_u8(0x40, 0x40, 0x40),
        brightness: config.ambient_brightness,
        ..default()
    });

    let direction = config.sun_direction.normalize_or(Vec3::ONE.normalize());
    commands.spawn((
        DirectionalLight {
            illuminance: config.sun_illuminance,
            ..default()
        },
        SunLight,
        Transform::from_translation(direction).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));
}
