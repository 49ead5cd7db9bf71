//! Per-frame scene state shared by the update and render stages.
//!
//! Everything the render loop mutates lives here and is passed around by
//! reference: both cameras, the interactive scene transform, mouse
//! tracking and the set of keys currently held. The type avoids any
//! platform API so it can be driven from tests.

use fnv::FnvHashSet;
use glam::Mat4;

use crate::camera::Camera;
use crate::constants::{
    vec3, EYE_SPEED, EYE_START, LOOK_AT_START, ROTATE_RATE, SCALE_RATE, TRANSLATE_RATE, UP_START,
};
use crate::controls::ModelControls;
use crate::error::CameraError;
use crate::input::{bindings_for_key, canonical_key, Action, MouseTracker, Trigger, KEY_ORDER};
use crate::look_at::LookAtCamera;
use crate::scene::{build_instances, InstanceData};

/// Which camera supplies the view matrix. Projection always comes from
/// the free-fly camera's zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    LookAt,
    FreeFly,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::LookAt => ViewMode::FreeFly,
            ViewMode::FreeFly => ViewMode::LookAt,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneState {
    pub camera: Camera,
    pub look_at: LookAtCamera,
    pub controls: ModelControls,
    pub view_mode: ViewMode,
    mouse: MouseTracker,
    held: FnvHashSet<&'static str>,
    quit: bool,
}

impl SceneState {
    pub fn new() -> Result<Self, CameraError> {
        let look_at = LookAtCamera::new(vec3(EYE_START), vec3(LOOK_AT_START), vec3(UP_START))?;
        Ok(Self {
            camera: Camera::default(),
            look_at,
            controls: ModelControls::default(),
            view_mode: ViewMode::default(),
            mouse: MouseTracker::default(),
            held: FnvHashSet::default(),
            quit: false,
        })
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn is_held(&self, key: &str) -> bool {
        canonical_key(key).is_some_and(|k| self.held.contains(k))
    }

    /// Key went down. Press-edge actions fire here, once; auto-repeat is
    /// ignored because the key is already held.
    pub fn key_pressed(&mut self, key: &str) {
        let Some(key) = canonical_key(key) else {
            return;
        };
        if !self.held.insert(key) {
            return;
        }
        for action in bindings_for_key(key) {
            if action.trigger() == Trigger::Pressed {
                self.apply(action, 0.0);
            }
        }
    }

    pub fn key_released(&mut self, key: &str) {
        if let Some(key) = canonical_key(key) {
            self.held.remove(key);
        }
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn mouse_moved(&mut self, x: f32, y: f32) {
        let d = self.mouse.delta(x, y);
        self.camera.process_mouse_movement(d.x, d.y, true);
    }

    pub fn mouse_left(&mut self) {
        self.mouse.reset();
    }

    pub fn scrolled(&mut self, dy: f32) {
        self.camera.process_mouse_scroll(dy);
    }

    /// Advance one frame: animation first, then held keys in
    /// [`KEY_ORDER`].
    pub fn update(&mut self, dt: f32) {
        self.controls.advance(dt);
        for key in KEY_ORDER {
            if !self.held.contains(key) {
                continue;
            }
            for action in bindings_for_key(key) {
                if action.trigger() == Trigger::Held {
                    self.apply(action, dt);
                }
            }
        }
    }

    pub fn apply(&mut self, action: Action, dt: f32) {
        match action {
            Action::Move(dir) => self.camera.process_keyboard(dir, dt),
            Action::RotateAxis(axis) => self.controls.bump_rotation(axis, ROTATE_RATE * dt),
            Action::RotateActiveBack => self.controls.rotate_active_back(ROTATE_RATE * dt),
            Action::Translate(axis, sign) => {
                self.controls.nudge_translation(axis, sign * TRANSLATE_RATE * dt)
            }
            Action::Scale(axis, sign) => self.controls.nudge_scale(axis, sign * SCALE_RATE * dt),
            Action::MoveEye(axis, sign) => {
                let eye = self.look_at.eye() + axis.unit() * sign * EYE_SPEED * dt;
                if let Err(err) = self.look_at.change_eye(eye) {
                    log::warn!("eye move rejected: {err}");
                }
            }
            Action::MoveLookAt(axis, sign) => {
                let target = self.look_at.look_at() + axis.unit() * sign * EYE_SPEED * dt;
                if let Err(err) = self.look_at.change_look_at(target) {
                    log::warn!("look-at move rejected: {err}");
                }
            }
            Action::SetUp(axis) => {
                if let Err(err) = self.look_at.change_view_up_vector(axis.unit()) {
                    log::warn!("up vector change rejected: {err}");
                }
            }
            Action::ToggleFan => {
                let on = self.controls.toggle_fan();
                log::debug!("fan spinning: {on}");
            }
            Action::ToggleView => {
                self.view_mode = self.view_mode.toggled();
                log::debug!("view mode: {:?}", self.view_mode);
            }
            Action::Quit => self.quit = true,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        match self.view_mode {
            ViewMode::LookAt => self.look_at.view_matrix(),
            ViewMode::FreeFly => self.camera.view_matrix(),
        }
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        self.camera.projection_matrix(aspect)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    pub fn instances(&self) -> Vec<InstanceData> {
        build_instances(&self.controls)
    }
}
