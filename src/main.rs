//! Starfield - animated particle backdrop
//!
//! Opens a window and renders a slowly rotating cloud of points sampled in a
//! spherical shell.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use starfield::config::AppConfig;
use starfield::systems::{AnimationSystem, RenderError, RenderSystem, WindowSystem};
use starfield_core::{FieldConfig, FieldError, ParticleField};

/// Everything that exists only while the visual is mounted
struct Mounted {
    window: WindowSystem,
    render: RenderSystem,
    field: ParticleField,
    animation: AnimationSystem,
}

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// None before `resumed` and after teardown
    mounted: Option<Mounted>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            mounted: None,
        }
    }

    /// Sample the field, open the window and upload the points
    fn mount(&self, event_loop: &ActiveEventLoop) -> Result<Mounted, Box<dyn std::error::Error>> {
        let field = build_field(&self.config.field)?;

        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let mut render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.camera.to_camera(),
            self.config.window.vsync,
        )?;
        render.upload_field(&field)?;
        window.show_point_count(field.point_count());

        Ok(Mounted {
            window,
            render,
            field,
            animation: AnimationSystem::new(self.config.animation.max_frame_delta),
        })
    }

    /// Drop the window, GPU resources and field
    fn teardown(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("Particle field unmounted");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.mounted.is_some() {
            return;
        }
        match self.mount(event_loop) {
            Ok(mounted) => {
                mounted.window.request_redraw();
                self.mounted = Some(mounted);
                log::info!("Particle field mounted");
            }
            Err(e) => {
                log::error!("Failed to mount particle field: {}", e);
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(mounted) = &mut self.mounted else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                mounted.render.resize(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                    PhysicalKey::Code(KeyCode::KeyF) => mounted.window.toggle_fullscreen(),
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                mounted.animation.update(&mut mounted.field);

                match mounted.render.render_frame(&mounted.field) {
                    Ok(()) => {}
                    Err(e @ (RenderError::SurfaceLost | RenderError::SurfaceOutdated)) => {
                        log::warn!("{}, reconfiguring", e);
                        mounted.render.reconfigure();
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                    }
                }

                // Request next frame
                mounted.window.request_redraw();
            }

            _ => {}
        }
    }
}

/// Sample a field, seeded when the config asks for reproducible output
fn build_field(config: &FieldConfig) -> Result<ParticleField, FieldError> {
    match config.seed {
        Some(seed) => ParticleField::new(config, &mut SmallRng::seed_from_u64(seed)),
        None => ParticleField::new(config, &mut rand::rng()),
    }
}

fn main() {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Starfield");

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
