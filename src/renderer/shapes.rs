//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in world space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle
pub fn quad(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_quad(min, size, color, color)
}

/// Rectangle with a vertical color gradient (bottom to top)
pub fn gradient_quad(min: Vec2, size: Vec2, bottom: [f32; 4], top: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, bottom),
        Vertex::new(max.x, min.y, bottom),
        Vertex::new(max.x, max.y, top),
        Vertex::new(min.x, min.y, bottom),
        Vertex::new(max.x, max.y, top),
        Vertex::new(min.x, max.y, top),
    ]
}

/// Trapezoid with a flat bottom and top, centered on `center_x`
pub fn trapezoid(
    center_x: f32,
    bottom_y: f32,
    bottom_width: f32,
    top_width: f32,
    height: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let top_y = bottom_y + height;
    let bl = Vec2::new(center_x - bottom_width / 2.0, bottom_y);
    let br = Vec2::new(center_x + bottom_width / 2.0, bottom_y);
    let tl = Vec2::new(center_x - top_width / 2.0, top_y);
    let tr = Vec2::new(center_x + top_width / 2.0, top_y);
    vec![
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tl.x, tl.y, color),
    ]
}

/// Single triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Teardrop filling a square cell anchored at `min`: round bottom, pointed top
pub fn teardrop(min: Vec2, size: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let radius = size * 0.3;
    let center = Vec2::new(min.x + size / 2.0, min.y + radius + size * 0.05);
    let tip = Vec2::new(center.x, min.y + size * 0.95);

    let mut vertices = circle(center, radius, color, segments);
    vertices.extend(triangle(
        Vec2::new(center.x - radius, center.y),
        Vec2::new(center.x + radius, center.y),
        tip,
        color,
    ));
    vertices
}
