//! Scene graph module
//!
//! Root-level nodes are the star background, Earth and the orbit pivot. The pivot owns
//! the satellite container, which later receives the satellite model.

use bevy::prelude::*;

pub mod background;
pub mod earth;
pub mod lighting;
pub mod orbit;

pub use background::spawn_background;
pub use earth::spawn_earth;
pub use lighting::spawn_lights;
pub use orbit::{SatelliteContainer, spawn_orbit};

/// Plugin for static scene assembly
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_background, spawn_earth, spawn_orbit, spawn_lights),
        );
    }
}
