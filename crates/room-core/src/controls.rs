//! Interactive scene transform (rotation / translation / scale keys).

use glam::{Mat4, Vec3};

use crate::constants::{vec3, DEFAULT_ROTATION, DEFAULT_SCALE, FAN_SPEED};
use crate::transform::{compose, Axis};

/// The keyboard-driven transform. Translation and scale move the whole
/// room. Pressing X/Y/Z bumps that axis and makes it the active one; R then
/// rotates back on whichever axis is active. The Y angle turns the chair
/// backs, and the fan animates it.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelControls {
    pub rotation_deg: Vec3,
    pub active_axis: Axis,
    pub translation: Vec3,
    pub scale: Vec3,
    pub fan_spinning: bool,
}

impl Default for ModelControls {
    fn default() -> Self {
        Self {
            rotation_deg: vec3(DEFAULT_ROTATION),
            active_axis: Axis::Z,
            translation: Vec3::ZERO,
            scale: vec3(DEFAULT_SCALE),
            fan_spinning: false,
        }
    }
}

impl ModelControls {
    pub fn bump_rotation(&mut self, axis: Axis, degrees: f32) {
        self.rotation_deg[axis.index()] += degrees;
        self.active_axis = axis;
    }

    pub fn rotate_active_back(&mut self, degrees: f32) {
        self.rotation_deg[self.active_axis.index()] -= degrees;
    }

    pub fn nudge_translation(&mut self, axis: Axis, delta: f32) {
        self.translation[axis.index()] += delta;
    }

    /// Scale is not clamped; it may pass through zero and mirror.
    pub fn nudge_scale(&mut self, axis: Axis, delta: f32) {
        self.scale[axis.index()] += delta;
    }

    pub fn toggle_fan(&mut self) -> bool {
        self.fan_spinning = !self.fan_spinning;
        self.fan_spinning
    }

    /// Per-frame animation. While the fan spins, Y advances at a fixed
    /// rate and becomes the active axis.
    pub fn advance(&mut self, dt: f32) {
        if self.fan_spinning {
            self.rotation_deg.y += FAN_SPEED * dt;
            self.active_axis = Axis::Y;
        }
    }

    pub fn spin_y(&self) -> f32 {
        self.rotation_deg.y
    }

    /// `T · S`, the parent of every placement in the room.
    pub fn scene_matrix(&self) -> Mat4 {
        compose(self.translation, Mat4::IDENTITY, self.scale)
    }
}
