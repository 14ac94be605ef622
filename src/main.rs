use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod animation;
mod camera;
mod config;
mod satellite;
mod scene;

use animation::AnimationPlugin;
use camera::{FollowCamera, FollowCameraPlugin, MainCamera};
use config::SceneConfig;
use satellite::SatellitePlugin;
use scene::ScenePlugin;

// Setup the follow camera; it is repositioned every frame once the satellite exists.
pub fn setup(mut commands: Commands, config: Res<SceneConfig>, rig: Res<FollowCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera_fov_deg.to_radians(),
            near: config.camera_near,
            far: config.camera_far,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        MainCamera,
        Tonemapping::TonyMcMapface,
        rig.camera_transform(Vec3::new(config.orbit_radius, 0.0, 0.0)),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Orbit View".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Loaded after DefaultPlugins so the log plugin reports where the config came from.
    app.insert_resource(SceneConfig::load_or_default());

    app.add_plugins(ScenePlugin);
    app.add_plugins(SatellitePlugin);
    app.add_plugins(AnimationPlugin);
    app.add_plugins(FollowCameraPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
