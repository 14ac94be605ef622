//! Star background: a large unlit sphere seen from the inside

use bevy::prelude::*;

use crate::config::SceneConfig;

#[derive(Component)]
pub struct Background;

pub fn spawn_background(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(config.background_texture_path.clone())),
        unlit: true,
        // Render back faces too, the camera is always inside.
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(config.background_radius).mesh().uv(64, 64))),
        MeshMaterial3d(material),
        Transform::default(),
        Background,
        Name::new("Background"),
    ));
}
