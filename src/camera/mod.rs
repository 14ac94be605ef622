//! Follow camera module
//!
//! Keeps the main camera on a sphere of fixed radius around the satellite, steered by
//! the arrow keys.

use bevy::prelude::*;

pub mod follow;
pub mod systems;

pub use follow::{FollowCamera, MainCamera};
pub use systems::{follow_satellite, handle_camera_keys, log_viewport_resize};

use crate::animation::advance_spins;
use crate::config::SceneConfig;
use crate::satellite::attach_satellite_model;

/// Plugin for the spherical follow camera
pub struct FollowCameraPlugin;

impl Plugin for FollowCameraPlugin {
    fn build(&self, app: &mut App) {
        let rig = app
            .world()
            .get_resource::<SceneConfig>()
            .map(FollowCamera::from_config)
            .unwrap_or_default();

        app.insert_resource(rig).add_systems(
            Update,
            (
                handle_camera_keys,
                follow_satellite
                    .after(handle_camera_keys)
                    .after(advance_spins)
                    .after(attach_satellite_model),
                log_viewport_resize,
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationPlugin;
    use crate::satellite::resources::{AssetLoadFailure, ModelOutcome};
    use crate::satellite::{ActiveSatellite, SatelliteLoad, TextureCycle};
    use crate::scene::spawn_orbit;
    use bevy::input::keyboard::KeyboardInput;
    use bevy::window::WindowResized;

    #[test]
    fn camera_follows_this_frames_orbit_position() {
        let config = SceneConfig::default();
        let mut app = App::new();
        app.insert_resource(config.clone())
            .add_message::<KeyboardInput>()
            .add_message::<WindowResized>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<ActiveSatellite>()
            .insert_resource(TextureCycle::new(Vec::new()))
            .insert_resource(SatelliteLoad::Resolved(ModelOutcome::Failed(
                AssetLoadFailure::Missing,
            )))
            .add_plugins((AnimationPlugin, FollowCameraPlugin))
            .add_systems(Startup, spawn_orbit)
            .add_systems(Update, attach_satellite_model);
        let camera = app
            .world_mut()
            .spawn((MainCamera, Transform::default()))
            .id();

        let rig = *app.world().resource::<FollowCamera>();
        assert_eq!(rig, FollowCamera::from_config(&config));

        let orbit_start = Vec3::new(config.orbit_radius, 0.0, 0.0);
        for frame in 1..=5 {
            app.update();

            let target = Quat::from_rotation_y(frame as f32 * config.orbit_spin.y) * orbit_start;
            let transform = app.world().get::<Transform>(camera).unwrap();
            assert!(
                transform.translation.abs_diff_eq(target + rig.offset(), 1e-4),
                "frame {frame}: camera at {} expected {}",
                transform.translation,
                target + rig.offset()
            );
            assert!((transform.translation.distance(target) - rig.distance).abs() < 1e-4);
        }
    }
}
