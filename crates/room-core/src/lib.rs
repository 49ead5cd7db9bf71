pub mod camera;
pub mod constants;
pub mod controls;
pub mod error;
pub mod frame;
pub mod input;
pub mod look_at;
pub mod scene;
pub mod state;
pub mod transform;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use error::*;
pub use frame::*;
pub use input::*;
pub use look_at::*;
pub use scene::*;
pub use state::*;
pub use transform::*;
