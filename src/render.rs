use plexus_core::{Camera, FieldFrame, SceneUniforms, Viewport};
use web_sys as web;

mod helpers;
mod lines;
mod points;
mod surface_caps;

use lines::LinePass;
use points::PointPass;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: helpers::SceneBindings,
    points: PointPass,
    lines: LinePass,
    camera: Camera,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    /// `point_capacity` and `max_connections` size the vertex buffers once;
    /// the field never grows after startup.
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        point_capacity: usize,
        max_connections: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
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
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = surface_caps::pick_surface_format(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps::pick_alpha_mode(&caps.alpha_modes);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("field_shader"),
            source: wgpu::ShaderSource::Wgsl(plexus_core::FIELD_WGSL.into()),
        });
        let scene = helpers::create_scene_bindings(&device);
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene.layout],
            push_constant_ranges: &[],
        });
        let points = PointPass::new(&device, &pipeline_layout, &shader, format, point_capacity);
        let lines = LinePass::new(&device, &pipeline_layout, &shader, format, max_connections);

        log::info!(
            "[gpu] surface {}x{} {:?} alpha={:?}, buffers for {} points / {} connections",
            width,
            height,
            format,
            alpha_mode,
            point_capacity,
            max_connections
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            points,
            lines,
            camera: Camera::for_viewport(Viewport::new(width as f32, height as f32)),
            width,
            height,
        })
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    /// Follow the canvas backing size. The particle set itself is untouched.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.camera.set_viewport(self.viewport());
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    pub fn render(&mut self, frame: &FieldFrame<'_>) -> Result<(), wgpu::SurfaceError> {
        let uniforms = SceneUniforms::new(&self.camera, frame, self.viewport());
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.points.upload(&self.queue, frame);
        self.lines.upload(&self.queue, frame);

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            self.lines.draw(&mut rpass);
            self.points.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
