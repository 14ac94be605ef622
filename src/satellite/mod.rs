//! Satellite model module
//!
//! Loads the satellite asset once, substitutes a procedural stand-in when the load
//! fails, and cycles the model's surface textures on click.

use bevy::prelude::*;

pub mod components;
pub mod fallback;
pub mod resources;
pub mod systems;

pub use resources::{ActiveSatellite, SatelliteLoad, TextureCycle};
pub use systems::{
    attach_satellite_model, cycle_satellite_texture, poll_satellite_asset, start_satellite_load,
    tag_surface_capabilities,
};

/// Plugin for satellite model resolution and texture cycling
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveSatellite>()
            .init_resource::<SatelliteLoad>()
            .init_resource::<TextureCycle>()
            .add_systems(Startup, start_satellite_load)
            .add_systems(
                Update,
                (
                    poll_satellite_asset,
                    attach_satellite_model.after(poll_satellite_asset),
                    tag_surface_capabilities.after(attach_satellite_model),
                    cycle_satellite_texture.after(tag_surface_capabilities),
                ),
            );
    }
}
