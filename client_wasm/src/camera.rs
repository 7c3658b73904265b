//! Camera for the billiards table
//!
//! 2D orthographic view that keeps the whole table visible at any canvas
//! aspect ratio.

use glam::{Mat4, Vec2, Vec3};

/// World units left around the table edge
const MARGIN: f32 = 2.0;

pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
    table: Vec2,
}

impl Camera {
    /// Look down at a `width` x `height` table from a canvas with `aspect`
    pub fn orthographic(width: f32, height: f32, aspect: f32) -> Self {
        let table = Vec2::new(width, height);
        let (view, projection) = Self::matrices(table, aspect);
        Self {
            view,
            projection,
            table,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        let (view, projection) = Self::matrices(self.table, aspect);
        self.view = view;
        self.projection = projection;
    }

    /// Visible world extent: table plus margin, widened on one axis to match `aspect`
    pub fn visible_extent(table: Vec2, aspect: f32) -> Vec2 {
        let framed = table + Vec2::splat(MARGIN * 2.0);
        if !aspect.is_finite() || aspect <= 0.0 {
            return framed;
        }
        if framed.x / framed.y < aspect {
            Vec2::new(framed.y * aspect, framed.y)
        } else {
            Vec2::new(framed.x, framed.x / aspect)
        }
    }

    fn matrices(table: Vec2, aspect: f32) -> (Mat4, Mat4) {
        let center = table / 2.0;
        let eye = Vec3::new(center.x, center.y, 10.0);
        let target = Vec3::new(center.x, center.y, 0.0);
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);

        // y grows downward on the table, so top and bottom are swapped
        let half = Self::visible_extent(table, aspect) / 2.0;
        let projection = Mat4::orthographic_rh(-half.x, half.x, half.y, -half.y, 0.1, 100.0);

        (view, projection)
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // pad to 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
