//! Orbit and rotation animator
//!
//! Earth, the orbit pivot and the satellite each carry a [`Spin`]. Every frame the
//! spin's Euler angles advance by a fixed increment; there is no easing or delta-time
//! scaling.

use bevy::prelude::*;

/// Per-frame Euler rotation accumulator
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Spin {
    /// Increment applied every frame (radians, XYZ order).
    pub rate: Vec3,
    /// Accumulated angles (radians, XYZ order).
    pub angle: Vec3,
}

impl Spin {
    pub fn new(rate: Vec3) -> Self {
        Self {
            rate,
            angle: Vec3::ZERO,
        }
    }

    pub fn advance(&mut self) {
        self.angle += self.rate;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.angle.x, self.angle.y, self.angle.z)
    }
}

/// Plugin for per-frame spins
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_spins);
    }
}

/// Advance every spin by one frame and write the resulting rotation
pub fn advance_spins(mut query: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut transform) in &mut query {
        spin.advance();
        transform.rotation = spin.rotation();
    }
}
