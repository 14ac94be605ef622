//! Satellite systems: model resolution, attachment and texture cycling

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use std::iter;

use crate::animation::Spin;
use crate::config::SceneConfig;
use crate::satellite::components::{ModelKind, SatelliteModel, SurfaceCapability};
use crate::satellite::fallback::spawn_fallback_assembly;
use crate::satellite::resources::{
    ActiveSatellite, AssetLoadFailure, ModelOutcome, SatelliteLoad, TextureCycle,
};
use crate::scene::SatelliteContainer;

/// Startup system: load the texture palette and issue the one satellite model request
pub fn start_satellite_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let palette = config
        .satellite_texture_paths
        .iter()
        .map(|path| asset_server.load(path.clone()))
        .collect();
    commands.insert_resource(TextureCycle::new(palette));

    let handle: Handle<Gltf> = asset_server.load(config.satellite_model_path.clone());
    info!("Loading satellite model from {}", config.satellite_model_path);
    commands.insert_resource(SatelliteLoad::Pending(handle));
}

/// Choose the scene to spawn from a loaded glTF: its default scene, else the first one.
pub fn pick_scene(
    default_scene: Option<&Handle<Scene>>,
    scenes: &[Handle<Scene>],
) -> Result<Handle<Scene>, AssetLoadFailure> {
    default_scene
        .or_else(|| scenes.first())
        .cloned()
        .ok_or(AssetLoadFailure::NoScene)
}

/// Watch the pending model load and resolve it exactly once
pub fn poll_satellite_asset(
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut load: ResMut<SatelliteLoad>,
) {
    let SatelliteLoad::Pending(handle) = &*load else {
        return;
    };

    let outcome = match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => match gltfs.get(handle) {
            Some(gltf) => match pick_scene(gltf.default_scene.as_ref(), &gltf.scenes) {
                Ok(scene) => ModelOutcome::Loaded(scene),
                Err(err) => ModelOutcome::Failed(err),
            },
            None => ModelOutcome::Failed(AssetLoadFailure::Missing),
        },
        Some(LoadState::Failed(err)) => {
            ModelOutcome::Failed(AssetLoadFailure::Load(err.to_string()))
        }
        _ => return,
    };

    *load = SatelliteLoad::Resolved(outcome);
}

/// Attach the resolved model (or the fallback assembly) to the satellite container
///
/// Consumes the outcome once. If a model is somehow already attached, nothing new is
/// spawned. Without a container the outcome is kept until one appears.
pub fn attach_satellite_model(
    mut commands: Commands,
    mut warned_missing_container: Local<bool>,
    mut load: ResMut<SatelliteLoad>,
    mut active: ResMut<ActiveSatellite>,
    config: Res<SceneConfig>,
    palette: Res<TextureCycle>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    containers: Query<Entity, With<SatelliteContainer>>,
) {
    if !matches!(*load, SatelliteLoad::Resolved(_)) {
        return;
    }
    let Ok(container) = containers.single() else {
        if !*warned_missing_container {
            warn!("attach_satellite_model: satellite container not found, deferring attach");
            *warned_missing_container = true;
        }
        return;
    };
    let SatelliteLoad::Resolved(outcome) = std::mem::replace(&mut *load, SatelliteLoad::Consumed)
    else {
        return;
    };

    if active.entity().is_some() {
        warn!("attach_satellite_model: a satellite is already attached, ignoring outcome");
        return;
    }

    let (model, kind) = match outcome {
        ModelOutcome::Loaded(scene) => {
            info!("Satellite model loaded from {}", config.satellite_model_path);
            let entity = commands
                .spawn((
                    Name::new("Satellite"),
                    SceneRoot(scene),
                    Transform::from_scale(Vec3::splat(config.model_scale)),
                ))
                .id();
            (entity, ModelKind::Loaded)
        }
        ModelOutcome::Failed(err) => {
            error!(
                "An error occurred loading the satellite model {}: {err}; using fallback assembly",
                config.satellite_model_path
            );
            let entity =
                spawn_fallback_assembly(&mut commands, &mut meshes, &mut materials, &palette);
            (entity, ModelKind::Fallback)
        }
    };

    commands
        .entity(model)
        .insert((SatelliteModel { kind }, Spin::new(config.satellite_spin)));
    commands.entity(container).add_child(model);
    active.attach(model);
}

/// Tag satellite meshes with their surface capability
///
/// glTF scenes spawn their meshes a few frames after the root, so untagged meshes are
/// picked up as they appear. Meshes whose material is not available yet are retried.
pub fn tag_surface_capabilities(
    mut commands: Commands,
    active: Res<ActiveSatellite>,
    children: Query<&Children>,
    untagged: Query<&MeshMaterial3d<StandardMaterial>, Without<SurfaceCapability>>,
    materials: Res<Assets<StandardMaterial>>,
) {
    let Some(model) = active.entity() else {
        return;
    };

    for entity in iter::once(model).chain(children.iter_descendants(model)) {
        let Ok(material) = untagged.get(entity) else {
            continue;
        };
        let Some(material) = materials.get(&material.0) else {
            continue;
        };
        commands
            .entity(entity)
            .insert(SurfaceCapability::for_material(material));
    }
}

/// On click, advance the palette and put the new texture on every replaceable surface
pub fn cycle_satellite_texture(
    mouse: Res<ButtonInput<MouseButton>>,
    active: Res<ActiveSatellite>,
    mut cycle: ResMut<TextureCycle>,
    models: Query<&SatelliteModel>,
    children: Query<&Children>,
    surfaces: Query<(&SurfaceCapability, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(model) = active.entity() else {
        return;
    };
    let Some(texture) = cycle.advance() else {
        return;
    };
    if let Ok(satellite) = models.get(model) {
        debug!(
            "{:?} satellite texture index -> {}",
            satellite.kind,
            cycle.index()
        );
    }

    for entity in iter::once(model).chain(children.iter_descendants(model)) {
        let Ok((capability, material)) = surfaces.get(entity) else {
            continue;
        };
        if *capability != SurfaceCapability::Replaceable {
            continue;
        }
        // Mutable access flags the material as changed so it is re-prepared for the GPU.
        if let Some(mut material) = materials.get_mut(&material.0) {
            material.base_color_texture = Some(texture.clone());
        }
    }
}
