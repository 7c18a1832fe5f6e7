use super::helpers::{self, ScenePipelineDesc};
use plexus_core::PointVertex;

const POINT_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const QUAD_VERTICES: u32 = 6;

/// Round, depth-attenuated points drawn as one instanced quad per particle.
pub(crate) struct PointPass {
    pipeline: wgpu::RenderPipeline,
    buffer: wgpu::Buffer,
    capacity: usize,
    scratch: Vec<PointVertex>,
}

impl PointPass {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        capacity: usize,
    ) -> Self {
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &POINT_ATTRS,
        }];
        let pipeline = helpers::make_scene_pipeline(
            device,
            layout,
            shader,
            format,
            ScenePipelineDesc {
                label: "points_pipeline",
                vs_entry: "vs_point",
                fs_entry: "fs_point",
                buffers: &buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
            },
        );
        let buffer = helpers::create_vertex_buffer(
            device,
            "points_vb",
            std::mem::size_of::<PointVertex>(),
            capacity,
        );
        Self {
            pipeline,
            buffer,
            capacity,
            scratch: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, frame: &plexus_core::FieldFrame<'_>) {
        plexus_core::pack_points(frame, &mut self.scratch);
        self.scratch.truncate(self.capacity);
        if !self.scratch.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&self.scratch));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.scratch.is_empty() {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.buffer.slice(..));
        rpass.draw(0..QUAD_VERTICES, 0..self.scratch.len() as u32);
    }
}
