//! Orbit pivot and satellite container

use bevy::prelude::*;

use crate::animation::Spin;
use crate::config::SceneConfig;

/// Invisible anchor at Earth's centre; its spin carries the container around Earth.
#[derive(Component)]
pub struct OrbitPivot;

/// Holds the satellite model at a fixed offset from the pivot.
#[derive(Component)]
pub struct SatelliteContainer;

pub fn spawn_orbit(mut commands: Commands, config: Res<SceneConfig>) {
    commands
        .spawn((
            OrbitPivot,
            Transform::default(),
            Visibility::default(),
            Spin::new(config.orbit_spin),
            Name::new("Orbit Pivot"),
        ))
        .with_children(|pivot| {
            pivot.spawn((
                SatelliteContainer,
                Transform::from_xyz(config.orbit_radius, 0.0, 0.0),
                Visibility::default(),
                Name::new("Satellite Container"),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::advance_spins;

    #[test]
    fn container_orbits_at_fixed_radius() {
        let mut app = App::new();
        app.insert_resource(SceneConfig::default())
            .add_systems(Startup, spawn_orbit)
            .add_systems(Update, advance_spins);

        app.update();

        let world = app.world_mut();
        let pivot = world
            .query_filtered::<(Entity, &Transform), With<OrbitPivot>>()
            .single(world)
            .map(|(entity, transform)| (entity, *transform))
            .unwrap();
        assert_eq!(pivot.1.translation, Vec3::ZERO);

        let (container, parent) = world
            .query_filtered::<(Entity, &ChildOf), With<SatelliteContainer>>()
            .single(world)
            .map(|(entity, child_of)| (entity, child_of.parent()))
            .unwrap();
        assert_eq!(parent, pivot.0);

        for _ in 0..50 {
            app.update();
        }

        let world = app.world();
        let pivot_rotation = world.get::<Transform>(pivot.0).unwrap().rotation;
        let local = world.get::<Transform>(container).unwrap().translation;
        let position = pivot_rotation * local;
        assert!((position.length() - 6.0).abs() < 1e-4);
        assert!(position.y.abs() < 1e-5);
        // 51 frames at 0.005 rad/frame about Y.
        let expected = Quat::from_rotation_y(51.0 * 0.005) * Vec3::new(6.0, 0.0, 0.0);
        assert!(position.abs_diff_eq(expected, 1e-4));
    }
}
