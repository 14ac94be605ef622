//! Satellite components

use bevy::prelude::*;

/// Which representation ended up attached to the satellite container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelKind {
    /// The external glTF asset.
    Loaded,
    /// The procedural body + panels stand-in.
    Fallback,
}

/// Root entity of the active satellite representation
#[derive(Component, Clone, Copy, Debug)]
pub struct SatelliteModel {
    pub kind: ModelKind,
}

/// Whether a satellite mesh carries a surface texture that the texture cycle may replace
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceCapability {
    Replaceable,
    Fixed,
}

impl SurfaceCapability {
    pub fn for_material(material: &StandardMaterial) -> Self {
        if material.base_color_texture.is_some() {
            Self::Replaceable
        } else {
            Self::Fixed
        }
    }
}
