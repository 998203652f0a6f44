//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Point pipeline and the one-time point upload
//! - Per-frame uniform update and draw

use std::sync::Arc;
use winit::window::Window;
use starfield_core::ParticleField;
use starfield_render::{
    camera::Camera,
    context::{ContextError, RenderContext},
    pipeline::{PointPipeline, PointUniforms, PointVertex},
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// Surface no longer matches the window and must be reconfigured
    SurfaceOutdated,
    /// GPU out of memory
    OutOfMemory,
    /// The cloud does not fit in one instance buffer
    TooManyPoints { count: usize, max: u64 },
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "GPU setup failed: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::SurfaceOutdated => write!(f, "Surface outdated"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::TooManyPoints { count, max } => write!(
                f,
                "{} points exceed the GPU buffer limit ({} points max)",
                count, max
            ),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering of the particle field
pub struct RenderSystem {
    context: RenderContext,
    point_pipeline: PointPipeline,
    render_config: RenderingConfig,
    camera: Camera,
    /// Window has zero area; frames are skipped until it is restored
    minimized: bool,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera: Camera,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let point_pipeline = PointPipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            point_pipeline,
            render_config,
            camera,
            minimized: false,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.minimized = !is_drawable(width, height);
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after `SurfaceLost`)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Upload the field's points to the GPU
    ///
    /// Called once per mount; frames never re-upload. Fails if the cloud
    /// does not fit in a single vertex buffer on this device.
    pub fn upload_field(&mut self, field: &ParticleField) -> Result<(), RenderError> {
        let max_buffer_size = self.context.device.limits().max_buffer_size;
        check_point_capacity(field.point_count(), max_buffer_size)?;
        self.point_pipeline
            .upload_points(&self.context.device, field.points());
        log::info!("Uploaded {} points", self.point_pipeline.point_count());
        Ok(())
    }

    /// Uniforms for the current frame
    ///
    /// Only the model matrix depends on the field; color and size come from
    /// config and never change with rotation.
    fn frame_uniforms(&self, field: &ParticleField) -> PointUniforms {
        let aspect = self.context.aspect_ratio();
        build_uniforms(&self.render_config, &self.camera, field, aspect, self.context.config.height)
    }

    /// Render a single frame
    ///
    /// Does nothing while the window is minimized.
    pub fn render_frame(&mut self, field: &ParticleField) -> Result<(), RenderError> {
        if self.minimized {
            return Ok(());
        }

        let uniforms = self.frame_uniforms(field);
        self.point_pipeline
            .update_uniforms(&self.context.queue, &uniforms);

        // Get surface texture
        let output = self
            .context
            .surface
            .get_current_texture()
            .map_err(surface_error)?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.point_pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// True if a surface of this size can be presented to
fn is_drawable(width: u32, height: u32) -> bool {
    width > 0 && height > 0
}

/// Check that `count` points fit in one instance buffer of at most
/// `max_buffer_size` bytes and can be addressed as a `u32` instance range
fn check_point_capacity(count: usize, max_buffer_size: u64) -> Result<u32, RenderError> {
    let stride = std::mem::size_of::<PointVertex>() as u64;
    let max = (max_buffer_size / stride).min(u32::MAX as u64);
    match u64::try_from(count) {
        Ok(n) if n <= max => Ok(n as u32),
        _ => Err(RenderError::TooManyPoints { count, max }),
    }
}

/// Map a surface acquisition failure onto the frame loop's recovery paths
fn surface_error(e: wgpu::SurfaceError) -> RenderError {
    match e {
        wgpu::SurfaceError::Lost => RenderError::SurfaceLost,
        wgpu::SurfaceError::Outdated => RenderError::SurfaceOutdated,
        wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
        e => RenderError::Other(format!("{:?}", e)),
    }
}

/// Assemble the point uniforms for one frame
fn build_uniforms(
    config: &RenderingConfig,
    camera: &Camera,
    field: &ParticleField,
    aspect: f32,
    viewport_height: u32,
) -> PointUniforms {
    PointUniforms {
        model_matrix: field.model_matrix(),
        view_matrix: camera.view_matrix(),
        projection_matrix: camera.projection_matrix(aspect),
        color: config.point_color,
        point_size: config.point_size,
        aspect,
        viewport_height: viewport_height as f32,
        size_attenuation: config.size_attenuation as u32,
    }
}
