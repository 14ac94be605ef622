use bevy::prelude::*;

use crate::animation::Spin;
use crate::config::SceneConfig;

/// Marker component for the Earth entity
#[derive(Component)]
pub struct Earth;

/// Spawn the textured, spinning Earth sphere at the origin
pub fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let mut mesh = Sphere::new(config.earth_radius).mesh().uv(64, 64);
    // Parallax mapping of the bump texture needs tangents.
    if let Err(err) = mesh.generate_tangents() {
        warn!("Earth mesh tangents unavailable, bump map will be flat: {err}");
    }

    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(asset_server.load(config.earth_texture_path.clone())),
        metallic_roughness_texture: Some(asset_server.load(config.earth_specular_path.clone())),
        depth_map: Some(asset_server.load(config.earth_bump_path.clone())),
        parallax_depth_scale: config.earth_bump_scale,
        perceptual_roughness: 1.0,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Visibility::Visible,
        Spin::new(config.earth_spin),
        Earth,
        Name::new("Earth"),
    ));
}
