//! Rendering module
//!
//! `draw` describes a frame through the `Renderer` trait. `SpriteBatch`
//! turns those calls into vertices and HUD labels, and `RenderState`
//! presents the vertices with WebGPU.

pub mod batch;
pub mod camera;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::{SpriteBatch, TextLabel};
pub use camera::Camera;
pub use pipeline::RenderState;
pub use vertex::Vertex;

use glam::Vec2;

use crate::consts::*;
use crate::sim::GameState;

/// Texture handles for everything the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Bucket,
    Drop,
}

impl Sprite {
    /// Quad size in world units
    pub fn size(&self) -> Vec2 {
        match self {
            Sprite::Background => Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            Sprite::Bucket => Vec2::splat(BUCKET_SIZE),
            Sprite::Drop => Vec2::splat(DROP_SIZE),
        }
    }
}

/// Draw target for a frame
pub trait Renderer {
    /// Set the visible world extent
    fn set_viewport(&mut self, width: f32, height: f32);
    fn begin_frame(&mut self);
    /// Draw a sprite with its bottom-left corner at (x, y)
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32);
    /// Draw a text label anchored at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
    fn end_frame(&mut self);
}

/// Draw the game: background, bucket, raindrops, then the score labels
pub fn draw(state: &GameState, renderer: &mut impl Renderer) {
    renderer.set_viewport(SCREEN_WIDTH, SCREEN_HEIGHT);
    renderer.begin_frame();

    renderer.draw_image(Sprite::Background, 0.0, 0.0);
    renderer.draw_image(Sprite::Bucket, state.bucket.x, state.bucket.y);
    for drop in &state.raindrops {
        renderer.draw_image(Sprite::Drop, drop.x, drop.y);
    }

    let (x, y) = SCORE_LABEL_POS;
    renderer.draw_text(&format!("score: {}", state.score), x, y);
    let (x, y) = HIGH_SCORE_LABEL_POS;
    renderer.draw_text(&format!("highscore: {}", state.high_score), x, y);

    renderer.end_frame();
}
