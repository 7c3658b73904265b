//! CPU-side geometry for one frame
//!
//! [`DrawList`] is the host side of `billiards_core::Renderer`: it turns
//! polygons into a triangle list and circles into a line list, ready to
//! be copied into vertex buffers.

use billiards_core::Renderer;
use glam::Vec2;

/// Segments used to approximate a circle outline
pub const CIRCLE_SEGMENTS: usize = 32;

pub const FELT_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
pub const OUTLINE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

/// Vertex data (matches shader VertexInput)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    fn new(p: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: p.to_array(),
            color,
        }
    }
}

/// Fan-triangulate a convex polygon
pub fn polygon_triangles(vertices: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    let anchor = vertices[0];
    vertices[1..]
        .windows(2)
        .flat_map(|edge| {
            [
                Vertex::new(anchor, color),
                Vertex::new(edge[0], color),
                Vertex::new(edge[1], color),
            ]
        })
        .collect()
}

/// Closed outline as line segments: two vertices per segment
pub fn circle_outline(center: Vec2, radius: f32, segments: usize, color: [f32; 4]) -> Vec<Vertex> {
    let point = |i: usize| {
        let angle = std::f32::consts::TAU * i as f32 / segments as f32;
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    };

    (0..segments)
        .flat_map(|i| [Vertex::new(point(i), color), Vertex::new(point(i + 1), color)])
        .collect()
}

/// Geometry collected for the current frame
#[derive(Debug, Default)]
pub struct DrawList {
    pub triangles: Vec<Vertex>,
    pub lines: Vec<Vertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for DrawList {
    fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
    }

    fn draw_polygon(&mut self, vertices: &[Vec2]) {
        self.triangles.extend(polygon_triangles(vertices, FELT_COLOR));
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32) {
        self.lines
            .extend(circle_outline(center, radius, CIRCLE_SEGMENTS, OUTLINE_COLOR));
    }
}
