use glam::Vec3;
use thiserror::Error;

/// Reasons a look-at basis cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CameraError {
    #[error("eye and look-at target coincide at {0}")]
    CoincidentEyeAndTarget(Vec3),
    #[error("up vector has zero length")]
    ZeroUpVector,
    #[error("up vector {up} is parallel to view direction {view}")]
    UpParallelToView { up: Vec3, view: Vec3 },
}
