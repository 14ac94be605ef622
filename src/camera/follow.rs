//! Spherical follow camera state and math

use bevy::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::config::SceneConfig;

/// Marks the camera driven by the follow controller.
#[derive(Component)]
pub struct MainCamera;

/// One discrete angular step from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraStep {
    Up,
    Down,
    Left,
    Right,
}

impl CameraStep {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowUp => Some(Self::Up),
            KeyCode::ArrowDown => Some(Self::Down),
            KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::ArrowRight => Some(Self::Right),
            _ => None,
        }
    }
}

/// Follow camera state: azimuth `theta`, polar angle `phi` (measured from +Y) and a
/// fixed distance to the target.
///
/// The angles are never clamped or wrapped; they accumulate for the whole session.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct FollowCamera {
    pub theta: f32,
    pub phi: f32,
    pub distance: f32,
    pub step: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl FollowCamera {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            theta: config.camera_initial_theta,
            phi: config.camera_initial_phi,
            distance: config.camera_distance,
            step: config.camera_rotation_step,
        }
    }

    pub fn apply(&mut self, step: CameraStep) {
        match step {
            CameraStep::Up => self.phi -= self.step,
            CameraStep::Down => self.phi += self.step,
            CameraStep::Left => self.theta += self.step,
            CameraStep::Right => self.theta -= self.step,
        }
    }

    /// Offset of the eye from the target on the sphere of radius `distance`.
    pub fn offset(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.distance * Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta)
    }

    pub fn eye(&self, target: Vec3) -> Vec3 {
        target + self.offset()
    }

    /// True once the camera has passed over a pole. Uses the remainder of `phi`, so a
    /// negative `phi` never counts as inverted.
    pub fn is_inverted(&self) -> bool {
        self.phi % TAU > PI
    }

    pub fn up(&self) -> Vec3 {
        if self.is_inverted() {
            Vec3::NEG_Y
        } else {
            Vec3::Y
        }
    }

    /// Camera transform on the sphere around `target`, aimed at it.
    pub fn camera_transform(&self, target: Vec3) -> Transform {
        Transform::from_translation(self.eye(target)).looking_at(target, self.up())
    }
}
