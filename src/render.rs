use crate::core::{EngineError, FrameSnapshot, SurfaceExtent};
use glam::Vec3;
use web_sys as web;

mod helpers;
mod particles;

use particles::{create_particle_resources, ParticleResources, ParticleUniforms};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,
    extent: SurfaceExtent,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        particle_count: usize,
    ) -> Result<Self, EngineError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| EngineError::Surface(format!("create_surface: {e}")))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| EngineError::Surface("no WebGPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| EngineError::Surface(format!("request_device: {e:?}")))?;
        let caps = surface.get_capabilities(&adapter);
        if caps.formats.is_empty() || caps.alpha_modes.is_empty() {
            return Err(EngineError::Surface(
                "surface reports no usable formats".into(),
            ));
        }
        let format = helpers::pick_surface_format(&caps);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: helpers::pick_alpha_mode(&caps),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let particles = create_particle_resources(&device, format, particle_count);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?} particles={}",
            width,
            height,
            format,
            config.alpha_mode,
            particle_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            extent: SurfaceExtent::new(width, height),
            // transparent so the page (camera feed) shows through
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if self.extent.sync(width, height) {
            let (w, h) = self.extent.size();
            self.config.width = w;
            self.config.height = h;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure after the surface was lost or went outdated, even when
    /// the canvas size has not changed.
    pub fn reconfigure(&mut self, width: u32, height: u32) {
        self.extent.invalidate();
        self.resize_if_needed(width, height);
    }

    /// Upload this frame's positions and draw them as additive sprites.
    pub fn render(
        &mut self,
        frame_data: &FrameSnapshot,
        positions: &[Vec3],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = self.extent.size();
        let count = positions.len().min(self.particles.instance_count as usize);
        // full re-upload; fine at a few thousand points
        self.queue.write_buffer(
            &self.particles.instance_buffer,
            0,
            bytemuck::cast_slice(&positions[..count]),
        );
        let u = ParticleUniforms {
            view: frame_data.view.to_cols_array_2d(),
            proj: frame_data.projection.to_cols_array_2d(),
            model: frame_data.model.to_cols_array_2d(),
            color: frame_data.color.extend(frame_data.opacity).to_array(),
            viewport: [width as f32, height as f32],
            point_size: frame_data.point_size,
            size_scale: height as f32 * 0.5,
        };
        self.queue
            .write_buffer(&self.particles.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("particles_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.particles.pipeline);
            rpass.set_bind_group(0, &self.particles.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.instance_buffer.slice(..));
            rpass.draw(0..6, 0..count as u32);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
