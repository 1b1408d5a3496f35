use clap::Parser;
use glam::Vec2;
use std::time::Duration;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use hotspot_core::{Viewport, BLINK_PERIOD_MS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

mod body;
mod gpu;
mod input;
mod scene;
mod text;

use gpu::GpuState;
use scene::Scene;

// pixels of trackpad scroll that count as one wheel notch
const PIXELS_PER_WHEEL_STEP: f64 = 50.0;

#[derive(Parser)]
#[command(name = "hotspot", about = "Car model with clickable tooltip markers")]
struct Args {
    /// Initial window width in pixels.
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: u32,

    /// Marker blink period in milliseconds.
    #[arg(long, default_value_t = BLINK_PERIOD_MS)]
    blink_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(scene::window_title())
        .with_inner_size(winit::dpi::PhysicalSize::new(args.width, args.height))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut scene = Scene::new(
        Viewport::from((state.width, state.height)),
        Duration::from_millis(args.blink_ms),
    )?;
    log::info!("left-click a marker for its tooltip, drag to orbit, wheel to zoom, L to look at point");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            let viewport = Viewport::from((state.width, state.height));
            match event {
                WindowEvent::Resized(size) => state.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    scene.pointer_moved(Vec2::new(position.x as f32, position.y as f32), viewport);
                }
                WindowEvent::MouseInput {
                    state: button_state,
                    button: MouseButton::Left,
                    ..
                } => match button_state {
                    ElementState::Pressed => scene.pointer_pressed(),
                    ElementState::Released => scene.pointer_released(viewport),
                },
                WindowEvent::MouseWheel { delta, .. } => {
                    let steps = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(p) => (p.y / PIXELS_PER_WHEEL_STEP) as f32,
                    };
                    scene.wheel(steps);
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => match logical_key {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Character(c) if c.eq_ignore_ascii_case("l") => scene.look_at_point(),
                    _ => {}
                },
                _ => {}
            }
        }
        Event::AboutToWait => {
            let viewport = Viewport::from((state.width, state.height));
            scene.frame(viewport);
            let instances = scene.instances();
            match state.render(&scene.frame_data(&instances)) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    elwt.exit();
                }
                Err(e) => log::debug!("frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
