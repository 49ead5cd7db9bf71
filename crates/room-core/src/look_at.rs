//! Eye / target / up camera that builds its view matrix by hand.

use glam::{Mat4, Vec3, Vec4};

use crate::error::CameraError;

// Squared length below which a vector is treated as zero.
const DEGENERATE_EPS: f32 = 1e-12;

/// Look-at camera. The three basis vectors are derived from `eye`,
/// `look_at` and `up` and are rebuilt from scratch on every change.
#[derive(Clone, Debug, PartialEq)]
pub struct LookAtCamera {
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,
    view_direction: Vec3,
    right_axis: Vec3,
    up_axis: Vec3,
}

impl LookAtCamera {
    pub fn new(eye: Vec3, look_at: Vec3, up: Vec3) -> Result<Self, CameraError> {
        let (view_direction, right_axis, up_axis) = basis(eye, look_at, up)?;
        Ok(Self {
            eye,
            look_at,
            up,
            view_direction,
            right_axis,
            up_axis,
        })
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// `(view_direction, right_axis, up_axis)`. `view_direction` points
    /// from the target back towards the eye.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.view_direction, self.right_axis, self.up_axis)
    }

    /// Move the eye. On error the camera is left untouched.
    pub fn change_eye(&mut self, eye: Vec3) -> Result<(), CameraError> {
        self.rebuild(eye, self.look_at, self.up)
    }

    /// Move the target. On error the camera is left untouched.
    pub fn change_look_at(&mut self, look_at: Vec3) -> Result<(), CameraError> {
        self.rebuild(self.eye, look_at, self.up)
    }

    /// Replace the up hint. On error the camera is left untouched.
    pub fn change_view_up_vector(&mut self, up: Vec3) -> Result<(), CameraError> {
        self.rebuild(self.eye, self.look_at, up)
    }

    /// World-to-view transform: basis vectors as rows, then a translation
    /// by `-eye`. Not cached.
    pub fn view_matrix(&self) -> Mat4 {
        let r = self.right_axis;
        let u = self.up_axis;
        let v = self.view_direction;
        Mat4::from_cols(
            Vec4::new(r.x, u.x, v.x, 0.0),
            Vec4::new(r.y, u.y, v.y, 0.0),
            Vec4::new(r.z, u.z, v.z, 0.0),
            Vec4::new(-r.dot(self.eye), -u.dot(self.eye), -v.dot(self.eye), 1.0),
        )
    }

    fn rebuild(&mut self, eye: Vec3, look_at: Vec3, up: Vec3) -> Result<(), CameraError> {
        let (view_direction, right_axis, up_axis) = basis(eye, look_at, up)?;
        self.eye = eye;
        self.look_at = look_at;
        self.up = up;
        self.view_direction = view_direction;
        self.right_axis = right_axis;
        self.up_axis = up_axis;
        Ok(())
    }
}

fn basis(eye: Vec3, look_at: Vec3, up: Vec3) -> Result<(Vec3, Vec3, Vec3), CameraError> {
    let to_eye = eye - look_at;
    if to_eye.length_squared() < DEGENERATE_EPS {
        return Err(CameraError::CoincidentEyeAndTarget(eye));
    }
    if up.length_squared() < DEGENERATE_EPS {
        return Err(CameraError::ZeroUpVector);
    }
    let view_direction = to_eye.normalize();
    let side = up.normalize().cross(view_direction);
    if side.length_squared() < DEGENERATE_EPS {
        return Err(CameraError::UpParallelToView {
            up,
            view: view_direction,
        });
    }
    let right_axis = side.normalize();
    let up_axis = view_direction.cross(right_axis);
    Ok((view_direction, right_axis, up_axis))
}
