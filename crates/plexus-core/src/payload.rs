//! GPU-facing packing of a [`FieldFrame`].
//!
//! Buffers are cleared and refilled every tick so their allocations are
//! reused for the whole session.

use crate::constants::{LINE_OPACITY, POINT_COLOR, POINT_OPACITY, POINT_SIZE};
use crate::field::FieldFrame;
use crate::state::{Camera, Viewport};

/// One point instance.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
}

/// One end of a connection line.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub point_color: [f32; 4], // rgb + opacity
    pub resolution: [f32; 2],
    pub point_size: f32,
    pub line_opacity: f32,
}

impl SceneUniforms {
    pub fn new(camera: &Camera, frame: &FieldFrame<'_>, viewport: Viewport) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: frame.rotation.matrix().to_cols_array_2d(),
            point_color: [POINT_COLOR[0], POINT_COLOR[1], POINT_COLOR[2], POINT_OPACITY],
            resolution: [viewport.width.max(1.0), viewport.height.max(1.0)],
            point_size: POINT_SIZE,
            line_opacity: LINE_OPACITY,
        }
    }
}

pub fn pack_points(frame: &FieldFrame<'_>, out: &mut Vec<PointVertex>) {
    out.clear();
    out.extend(frame.positions.iter().map(|p| PointVertex {
        position: p.to_array(),
    }));
}

/// Pack the active connections as a line list and return the number of
/// vertices to draw.
pub fn pack_lines(frame: &FieldFrame<'_>, out: &mut Vec<LineVertex>) -> u32 {
    out.clear();
    for c in &frame.connections[..frame.active_connection_count] {
        out.push(LineVertex {
            position: c.a_pos.to_array(),
            color: c.color_a,
        });
        out.push(LineVertex {
            position: c.b_pos.to_array(),
            color: c.color_b,
        });
    }
    (frame.active_connection_count * 2) as u32
}
