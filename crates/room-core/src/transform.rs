//! Model-matrix composition helpers.

use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// `Rx · Ry · Rz` from per-axis angles in degrees.
pub fn euler_rotation(degrees: Vec3) -> Mat4 {
    Mat4::from_rotation_x(degrees.x.to_radians())
        * Mat4::from_rotation_y(degrees.y.to_radians())
        * Mat4::from_rotation_z(degrees.z.to_radians())
}

/// `T · R · S`, always in that order.
pub fn compose(translation: Vec3, rotation: Mat4, scale: Vec3) -> Mat4 {
    Mat4::from_translation(translation) * rotation * Mat4::from_scale(scale)
}

/// A running transform advanced by the same relative translation `count`
/// times. The step is applied in the local frame of the accumulated
/// matrix, so a rotated start lays its row out along the rotated axis.
#[derive(Clone, Copy, Debug)]
pub struct Repeat {
    pub start: Mat4,
    pub step: Vec3,
    pub count: usize,
}

impl Repeat {
    pub fn new(start: Mat4, step: Vec3, count: usize) -> Self {
        Self { start, step, count }
    }

    pub fn iter(&self) -> impl Iterator<Item = Mat4> {
        let advance = Mat4::from_translation(self.step);
        std::iter::successors(Some(self.start), move |acc| Some(*acc * advance)).take(self.count)
    }
}
