//! Follow camera systems

use bevy::ecs::message::MessageReader;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::transform::helper::TransformHelper;
use bevy::window::WindowResized;

use crate::camera::follow::{CameraStep, FollowCamera, MainCamera};
use crate::satellite::ActiveSatellite;

/// Apply one angular step per arrow key press event
///
/// OS key repeats arrive as further pressed events, so holding a key keeps orbiting.
pub fn handle_camera_keys(
    mut keys: MessageReader<KeyboardInput>,
    mut rig: ResMut<FollowCamera>,
) {
    for event in keys.read() {
        if !event.state.is_pressed() {
            continue;
        }
        if let Some(step) = CameraStep::from_key(event.key_code) {
            rig.apply(step);
        }
    }
}

/// Place the main camera on its sphere around the satellite's current world position
///
/// Runs after the spins have advanced, so the target reflects this frame's transforms
/// rather than last frame's propagated `GlobalTransform`. A no-op until a satellite is
/// attached.
pub fn follow_satellite(
    rig: Res<FollowCamera>,
    active: Res<ActiveSatellite>,
    mut params: ParamSet<(TransformHelper, Query<&mut Transform, With<MainCamera>>)>,
) {
    let Some(satellite) = active.entity() else {
        return;
    };
    let target = match params.p0().compute_global_transform(satellite) {
        Ok(global) => global.translation(),
        Err(err) => {
            debug!("follow_satellite: no world transform for satellite: {err}");
            return;
        }
    };

    let camera_transform = rig.camera_transform(target);
    for mut transform in params.p1().iter_mut() {
        *transform = camera_transform;
    }
}

/// Bevy resizes the surface and recomputes the projection itself; just record it.
pub fn log_viewport_resize(mut resized: MessageReader<WindowResized>) {
    for event in resized.read() {
        debug!("Viewport resized to {}x{}", event.width, event.height);
    }
}
