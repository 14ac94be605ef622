//! Procedural stand-in satellite: a cuboid body with two flat panels on the local X axis

use bevy::prelude::*;

use crate::satellite::components::SurfaceCapability;
use crate::satellite::resources::TextureCycle;

/// Layout of one part of the fallback assembly
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackPart {
    pub name: &'static str,
    pub size: Vec3,
    pub offset: Vec3,
    /// Palette slot used for the initial surface texture.
    pub texture_index: usize,
}

const BODY_SIZE: Vec3 = Vec3::splat(0.5);
const PANEL_SIZE: Vec3 = Vec3::new(1.5, 0.05, 0.8);
const PANEL_OFFSET_X: f32 = 1.2;

pub fn fallback_parts() -> [FallbackPart; 3] {
    [
        FallbackPart {
            name: "Satellite Body",
            size: BODY_SIZE,
            offset: Vec3::ZERO,
            texture_index: 1,
        },
        FallbackPart {
            name: "Left Panel",
            size: PANEL_SIZE,
            offset: Vec3::new(-PANEL_OFFSET_X, 0.0, 0.0),
            texture_index: 0,
        },
        FallbackPart {
            name: "Right Panel",
            size: PANEL_SIZE,
            offset: Vec3::new(PANEL_OFFSET_X, 0.0, 0.0),
            texture_index: 0,
        },
    ]
}

/// Spawn the fallback assembly at the origin and return its root entity
pub fn spawn_fallback_assembly(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    palette: &TextureCycle,
) -> Entity {
    commands
        .spawn((
            Name::new("Fallback Satellite"),
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for part in fallback_parts() {
                let material = StandardMaterial {
                    base_color_texture: palette.texture_at(part.texture_index),
                    ..default()
                };
                let capability = SurfaceCapability::for_material(&material);
                parent.spawn((
                    Name::new(part.name),
                    Mesh3d(meshes.add(Cuboid::from_size(part.size))),
                    MeshMaterial3d(materials.add(material)),
                    Transform::from_translation(part.offset),
                    capability,
                ));
            }
        })
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_are_symmetric_about_body() {
        let [body, left, right] = fallback_parts();
        assert_eq!(body.offset, Vec3::ZERO);
        assert_eq!(left.size, right.size);
        assert_eq!(left.offset, -right.offset);
        assert_eq!(left.offset.y, 0.0);
        assert_eq!(left.offset.z, 0.0);
        // Panels are flat slabs, body is a cube.
        assert!(left.size.y < left.size.x && left.size.y < left.size.z);
        assert_eq!(body.size.x, body.size.y);
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(fallback_parts(), fallback_parts());
    }
}
