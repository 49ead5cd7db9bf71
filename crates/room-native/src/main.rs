mod keys;
mod render;

use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

use render::GpuState;
use room_core::{FrameClock, SceneState, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut scene = SceneState::new()?;
    let mut clock = FrameClock::new();
    log::info!("room viewer ready ({WINDOW_WIDTH}x{WINDOW_HEIGHT})");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Focused(false) => scene.release_all(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(name) = keys::key_name(code) {
                    match state {
                        ElementState::Pressed => scene.key_pressed(name),
                        ElementState::Released => scene.key_released(name),
                    }
                }
                if scene.quit_requested() {
                    elwt.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                scene.mouse_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => scene.mouse_left(),
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / 40.0) as f32,
                };
                scene.scrolled(dy);
            }
            _ => {}
        },
        Event::AboutToWait => {
            scene.update(clock.tick());
            match gpu.render(&scene) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory");
                    elwt.exit();
                }
                Err(err) => log::warn!("frame skipped: {err}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
