//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.10, 0.12, 0.28, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.22, 0.26, 0.40, 1.0];
    pub const RAIN_STREAK: [f32; 4] = [0.55, 0.65, 0.85, 0.25];
    pub const BUCKET: [f32; 4] = [0.55, 0.36, 0.20, 1.0];
    pub const BUCKET_RIM: [f32; 4] = [0.75, 0.55, 0.32, 1.0];
    pub const BUCKET_WATER: [f32; 4] = [0.25, 0.50, 0.95, 1.0];
    pub const DROP: [f32; 4] = [0.35, 0.65, 1.0, 1.0];
    pub const DROP_HIGHLIGHT: [f32; 4] = [0.85, 0.95, 1.0, 0.9];
}
