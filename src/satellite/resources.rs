//! Satellite resources: load state, the attached model and the texture palette

use bevy::gltf::Gltf;
use bevy::prelude::*;
use std::fmt;

/// Failure to obtain a usable satellite model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadFailure {
    /// The asset server reported a fetch or parse error.
    Load(String),
    /// The asset loaded but contains no scene to spawn.
    NoScene,
    /// The asset reported loaded but is not present in `Assets<Gltf>`.
    Missing,
}

impl fmt::Display for AssetLoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(reason) => write!(f, "asset load failed: {reason}"),
            Self::NoScene => write!(f, "asset contains no scenes"),
            Self::Missing => write!(f, "asset reported loaded but is missing"),
        }
    }
}

impl std::error::Error for AssetLoadFailure {}

/// The two ways a satellite model load can end
#[derive(Debug, Clone)]
pub enum ModelOutcome {
    Loaded(Handle<Scene>),
    Failed(AssetLoadFailure),
}

/// Single-resolution state of the satellite model load
///
/// Moves strictly forward: `NotStarted -> Pending -> Resolved -> Consumed`.
#[derive(Resource, Debug, Default)]
pub enum SatelliteLoad {
    #[default]
    NotStarted,
    Pending(Handle<Gltf>),
    Resolved(ModelOutcome),
    Consumed,
}

/// The one satellite representation attached to the container, if any
#[derive(Resource, Debug, Default)]
pub struct ActiveSatellite(Option<Entity>);

impl ActiveSatellite {
    pub fn entity(&self) -> Option<Entity> {
        self.0
    }

    /// Record the attached model. Returns false, leaving the existing one in place, if a
    /// model is already attached.
    pub fn attach(&mut self, entity: Entity) -> bool {
        if self.0.is_some() {
            return false;
        }
        self.0 = Some(entity);
        true
    }
}

/// Ordered palette of interchangeable satellite surface textures
#[derive(Resource, Debug, Default)]
pub struct TextureCycle {
    textures: Vec<Handle<Image>>,
    index: usize,
}

impl TextureCycle {
    pub fn new(textures: Vec<Handle<Image>>) -> Self {
        Self { textures, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Texture at `index`, wrapping around the palette.
    pub fn texture_at(&self, index: usize) -> Option<Handle<Image>> {
        if self.textures.is_empty() {
            return None;
        }
        Some(self.textures[index % self.textures.len()].clone())
    }

    /// Step to the next texture and return it; `None` for an empty palette.
    pub fn advance(&mut self) -> Option<Handle<Image>> {
        if self.textures.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.textures.len();
        self.texture_at(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(n: usize) -> (Assets<Image>, Vec<Handle<Image>>) {
        let mut images = Assets::<Image>::default();
        let handles = (0..n).map(|_| images.add(Image::default())).collect();
        (images, handles)
    }

    #[test]
    fn cycle_wraps_after_palette_length() {
        let (_images, handles) = palette(3);
        let mut cycle = TextureCycle::new(handles.clone());
        assert_eq!(cycle.index(), 0);

        assert_eq!(cycle.advance(), Some(handles[1].clone()));
        assert_eq!(cycle.advance(), Some(handles[2].clone()));
        assert_eq!(cycle.advance(), Some(handles[0].clone()));
        assert_eq!(cycle.index(), 0);

        // One more click lands one step past the start.
        cycle.advance();
        assert_eq!(cycle.index(), 1);
    }

    #[test]
    fn empty_cycle_never_advances() {
        let mut cycle = TextureCycle::default();
        assert!(cycle.advance().is_none());
        assert_eq!(cycle.index(), 0);
        assert!(cycle.texture_at(5).is_none());
    }

    #[test]
    fn texture_at_wraps() {
        let (_images, handles) = palette(2);
        let cycle = TextureCycle::new(handles.clone());
        assert_eq!(cycle.texture_at(3), Some(handles[1].clone()));
    }

    #[test]
    fn active_satellite_attaches_once() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut active = ActiveSatellite::default();
        assert!(active.entity().is_none());
        assert!(active.attach(first));
        assert!(!active.attach(second));
        assert_eq!(active.entity(), Some(first));
    }

    #[test]
    fn failure_messages() {
        let err = AssetLoadFailure::Load("Path not found: models/satellite.glb".into());
        assert_eq!(
            err.to_string(),
            "asset load failed: Path not found: models/satellite.glb"
        );
        assert_eq!(AssetLoadFailure::NoScene.to_string(), "asset contains no scenes");
    }
}
