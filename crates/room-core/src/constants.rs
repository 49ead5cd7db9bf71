use glam::Vec3;

// Shared tuning constants for the room viewer.

// Window
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "CSE 4208: Computer Graphics Laboratory";
pub const CLEAR_COLOR: [f64; 4] = [0.2, 0.3, 0.3, 1.0];

// Projection
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Free-fly camera defaults (degrees where angular)
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;
pub const PITCH_LIMIT: f32 = 89.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;
pub const YAW_KEY_RATE: f32 = 30.0; // deg/s for the N/M turn keys
pub const FREE_FLY_START: [f32; 3] = [0.0, 0.0, 3.0];

// Look-at camera start
pub const EYE_START: [f32; 3] = [0.0, 1.0, 3.0];
pub const LOOK_AT_START: [f32; 3] = [0.0, 0.0, 0.0];
pub const UP_START: [f32; 3] = [0.0, 1.0, 0.0];
pub const EYE_SPEED: f32 = 2.5; // world units/s for eye and look-at keys

// Interactive scene transform, per second
pub const ROTATE_RATE: f32 = 60.0; // deg/s
pub const TRANSLATE_RATE: f32 = 0.6;
pub const SCALE_RATE: f32 = 0.6;
pub const FAN_SPEED: f32 = 45.0; // deg/s while the fan spins

pub const DEFAULT_ROTATION: [f32; 3] = [0.0, 90.0, 0.0];
pub const DEFAULT_SCALE: [f32; 3] = [1.0, 1.0, 1.0];

// Floor tile rows advance this far along -Z per tile
pub const TILE_STEP: [f32; 3] = [0.0, 0.0, -0.4];

#[inline]
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::from_array(v)
}
