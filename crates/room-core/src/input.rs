use glam::Vec2;
use smallvec::{smallvec, SmallVec};

use crate::camera::CameraMovement;
use crate::transform::Axis;

/// Something a key does to the scene state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Move(CameraMovement),
    RotateAxis(Axis),
    RotateActiveBack,
    Translate(Axis, f32),
    Scale(Axis, f32),
    MoveEye(Axis, f32),
    MoveLookAt(Axis, f32),
    SetUp(Axis),
    ToggleFan,
    ToggleView,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Applied every frame while the key is down, scaled by dt.
    Held,
    /// Applied once on the press edge.
    Pressed,
}

impl Action {
    pub fn trigger(self) -> Trigger {
        match self {
            Action::SetUp(_) | Action::ToggleFan | Action::ToggleView | Action::Quit => {
                Trigger::Pressed
            }
            _ => Trigger::Held,
        }
    }
}

/// Keys in the order held actions are applied each frame.
pub const KEY_ORDER: &[&str] = &[
    "escape", "w", "s", "a", "d", "r", "g", "i", "k", "l", "j", "o", "p", "c", "v", "b", "n", "m",
    "u", "x", "y", "z", "h", "f", "t", "q", "e", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "tab",
];

/// Canonical (static, lowercase) name for a key, if it is bound.
#[inline]
pub fn canonical_key(key: &str) -> Option<&'static str> {
    KEY_ORDER
        .iter()
        .copied()
        .find(|k| k.eq_ignore_ascii_case(key))
}

/// Actions bound to `key`. A few keys carry two bindings.
pub fn bindings_for_key(key: &str) -> SmallVec<[Action; 2]> {
    use Action::*;
    use Axis::*;
    let Some(key) = canonical_key(key) else {
        return SmallVec::new();
    };
    match key {
        "escape" => smallvec![Quit],
        "w" => smallvec![Move(CameraMovement::Forward)],
        "s" => smallvec![Move(CameraMovement::Backward)],
        "a" => smallvec![Move(CameraMovement::Left)],
        "d" => smallvec![Move(CameraMovement::Right)],
        "r" => smallvec![RotateActiveBack],
        "g" => smallvec![ToggleFan, MoveEye(Z, -1.0)],
        "i" => smallvec![Translate(Y, 1.0)],
        "k" => smallvec![Translate(Y, -1.0)],
        "l" => smallvec![Translate(X, 1.0)],
        "j" => smallvec![Translate(X, -1.0)],
        "o" => smallvec![Translate(Z, 1.0)],
        "p" => smallvec![Translate(Z, -1.0)],
        "c" => smallvec![Scale(X, 1.0)],
        "v" => smallvec![Scale(X, -1.0)],
        "b" => smallvec![Scale(Y, 1.0)],
        "n" => smallvec![Scale(Y, -1.0), Move(CameraMovement::YawRight)],
        "m" => smallvec![Scale(Z, 1.0), Move(CameraMovement::YawLeft)],
        "u" => smallvec![Scale(Z, -1.0)],
        "x" => smallvec![RotateAxis(X)],
        "y" => smallvec![RotateAxis(Y)],
        "z" => smallvec![RotateAxis(Z)],
        "h" => smallvec![MoveEye(X, 1.0)],
        "f" => smallvec![MoveEye(X, -1.0)],
        "t" => smallvec![MoveEye(Z, 1.0)],
        "q" => smallvec![MoveEye(Y, 1.0)],
        "e" => smallvec![MoveEye(Y, -1.0)],
        "1" => smallvec![MoveLookAt(X, 1.0)],
        "2" => smallvec![MoveLookAt(X, -1.0)],
        "3" => smallvec![MoveLookAt(Y, 1.0)],
        "4" => smallvec![MoveLookAt(Y, -1.0)],
        "5" => smallvec![MoveLookAt(Z, 1.0)],
        "6" => smallvec![MoveLookAt(Z, -1.0)],
        "7" => smallvec![SetUp(X)],
        "8" => smallvec![SetUp(Y)],
        "9" => smallvec![SetUp(Z)],
        "tab" => smallvec![ToggleView],
        _ => SmallVec::new(),
    }
}

/// Turns absolute cursor positions into look deltas.
#[derive(Default, Clone, Copy, Debug)]
pub struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    /// Offset since the previous sample; zero on the first one. Y is
    /// flipped because window coordinates grow downwards.
    pub fn delta(&mut self, x: f32, y: f32) -> Vec2 {
        let pos = Vec2::new(x, y);
        let last = self.last.replace(pos).unwrap_or(pos);
        Vec2::new(pos.x - last.x, last.y - pos.y)
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
