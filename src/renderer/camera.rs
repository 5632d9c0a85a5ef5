//! Orthographic camera
//!
//! World space has its origin at the bottom-left and y up. The viewport is
//! the canvas in CSS pixels with y down.

use glam::{Mat4, Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Visible world extent
    pub world_size: Vec2,
    /// Canvas size in pixels
    pub viewport_size: Vec2,
}

impl Camera {
    pub fn new(world_size: Vec2, viewport_size: Vec2) -> Self {
        Self {
            world_size,
            viewport_size,
        }
    }

    /// Show `width` x `height` world units
    pub fn set_to_ortho(&mut self, width: f32, height: f32) {
        self.world_size = Vec2::new(width, height);
    }

    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport_size = Vec2::new(width, height);
        }
    }

    /// World to clip-space projection
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.world_size.x, 0.0, self.world_size.y, -1.0, 1.0)
    }

    /// Convert game coordinates to normalized device coordinates
    pub fn world_to_ndc(&self, world: Vec2) -> Vec2 {
        self.projection()
            .project_point3(Vec3::new(world.x, world.y, 0.0))
            .truncate()
    }

    /// Screen pixels (y down) to world units (y up)
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        let scale = self.world_size / self.viewport_size;
        Vec2::new(
            screen.x * scale.x,
            self.world_size.y - screen.y * scale.y,
        )
    }

    /// World units (y up) to screen pixels (y down)
    pub fn project(&self, world: Vec2) -> Vec2 {
        let scale = self.viewport_size / self.world_size;
        Vec2::new(
            world.x * scale.x,
            (self.world_size.y - world.y) * scale.y,
        )
    }
}
