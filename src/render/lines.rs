use super::helpers::{self, ScenePipelineDesc};
use plexus_core::LineVertex;

const LINE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Gradient connection lines. The buffer is sized for every possible pair;
/// only the active range is drawn each frame.
pub(crate) struct LinePass {
    pipeline: wgpu::RenderPipeline,
    buffer: wgpu::Buffer,
    capacity: usize, // in vertices
    scratch: Vec<LineVertex>,
    draw_range: u32,
}

impl LinePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        max_connections: usize,
    ) -> Self {
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &LINE_ATTRS,
        }];
        let pipeline = helpers::make_scene_pipeline(
            device,
            layout,
            shader,
            format,
            ScenePipelineDesc {
                label: "lines_pipeline",
                vs_entry: "vs_line",
                fs_entry: "fs_line",
                buffers: &buffers,
                topology: wgpu::PrimitiveTopology::LineList,
            },
        );
        let capacity = max_connections * 2;
        let buffer = helpers::create_vertex_buffer(
            device,
            "lines_vb",
            std::mem::size_of::<LineVertex>(),
            capacity,
        );
        Self {
            pipeline,
            buffer,
            capacity,
            scratch: Vec::with_capacity(capacity),
            draw_range: 0,
        }
    }

    pub(crate) fn upload(&mut self, queue: &wgpu::Queue, frame: &plexus_core::FieldFrame<'_>) {
        let range = plexus_core::pack_lines(frame, &mut self.scratch);
        self.draw_range = range.min(self.capacity as u32);
        if self.draw_range > 0 {
            let used = &self.scratch[..self.draw_range as usize];
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(used));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.draw_range == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.buffer.slice(..));
        rpass.draw(0..self.draw_range, 0..1);
    }
}
