//! CPU-side sprite batch
//!
//! Collects a frame's sprites as colored triangles and its text as labels.
//! Sprites are procedural; no image assets are involved.

use glam::Vec2;

use super::camera::Camera;
use super::shapes;
use super::vertex::{Vertex, colors};
use super::{Renderer, Sprite};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Segments used for round sprite parts
const ROUND_SEGMENTS: u32 = 16;

/// A text label in world space
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
}

/// Batches one frame of draw calls
#[derive(Debug, Clone)]
pub struct SpriteBatch {
    camera: Camera,
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
    drawing: bool,
}

impl SpriteBatch {
    /// Create a batch for a canvas of the given pixel size
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            camera: Camera::new(
                Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                Vec2::new(viewport_width, viewport_height),
            ),
            vertices: Vec::new(),
            labels: Vec::new(),
            drawing: false,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Triangles of the last (or current) frame, in world space
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Text labels of the last (or current) frame
    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    fn sprite_vertices(sprite: Sprite, min: Vec2) -> Vec<Vertex> {
        let size = sprite.size();
        match sprite {
            Sprite::Background => {
                let mut v =
                    shapes::gradient_quad(min, size, colors::SKY_BOTTOM, colors::SKY_TOP);
                // A few slanted streaks for texture
                for i in 0..12 {
                    let x = min.x + (i as f32 + 0.5) * size.x / 12.0;
                    let y = min.y + ((i * 7) % 12) as f32 * size.y / 12.0;
                    v.extend(shapes::triangle(
                        Vec2::new(x, y),
                        Vec2::new(x + 2.0, y),
                        Vec2::new(x + 12.0, y + 40.0),
                        colors::RAIN_STREAK,
                    ));
                }
                v
            }
            Sprite::Bucket => {
                let center_x = min.x + size.x / 2.0;
                let mut v = shapes::trapezoid(
                    center_x,
                    min.y,
                    size.x * 0.7,
                    size.x,
                    size.y * 0.8,
                    colors::BUCKET,
                );
                v.extend(shapes::quad(
                    Vec2::new(min.x + size.x * 0.08, min.y + size.y * 0.62),
                    Vec2::new(size.x * 0.84, size.y * 0.1),
                    colors::BUCKET_WATER,
                ));
                v.extend(shapes::quad(
                    Vec2::new(min.x, min.y + size.y * 0.8),
                    Vec2::new(size.x, size.y * 0.08),
                    colors::BUCKET_RIM,
                ));
                v
            }
            Sprite::Drop => {
                let mut v = shapes::teardrop(min, size.x, colors::DROP, ROUND_SEGMENTS);
                v.extend(shapes::circle(
                    Vec2::new(min.x + size.x * 0.42, min.y + size.y * 0.3),
                    size.x * 0.06,
                    colors::DROP_HIGHLIGHT,
                    8,
                ));
                v
            }
        }
    }
}

impl Renderer for SpriteBatch {
    fn set_viewport(&mut self, width: f32, height: f32) {
        self.camera.set_to_ortho(width, height);
    }

    fn begin_frame(&mut self) {
        if self.drawing {
            log::warn!("begin_frame called twice without end_frame");
        }
        self.vertices.clear();
        self.labels.clear();
        self.drawing = true;
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32) {
        if !self.drawing {
            log::warn!("draw_image({:?}) outside of a frame ignored", sprite);
            return;
        }
        self.vertices
            .extend(Self::sprite_vertices(sprite, Vec2::new(x, y)));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        if !self.drawing {
            log::warn!("draw_text({:?}) outside of a frame ignored", text);
            return;
        }
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos: Vec2::new(x, y),
        });
    }

    fn end_frame(&mut self) {
        if !self.drawing {
            log::warn!("end_frame called without begin_frame");
        }
        self.drawing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw;
    use crate::sim::GameState;

    #[test]
    fn test_draw_outside_frame_ignored() {
        let mut batch = SpriteBatch::new(800.0, 480.0);
        batch.draw_image(Sprite::Drop, 0.0, 0.0);
        batch.draw_text("hello", 0.0, 0.0);
        assert!(batch.vertices().is_empty());
        assert!(batch.labels().is_empty());
    }

    #[test]
    fn test_frame_collects_labels_and_vertices() {
        let mut state = GameState::new(5, 0.0);
        state.score = 7;
        state.high_score = 21;

        let mut batch = SpriteBatch::new(800.0, 480.0);
        draw(&state, &mut batch);

        assert!(!batch.is_drawing());
        assert!(!batch.vertices().is_empty());
        assert_eq!(batch.vertices().len() % 3, 0);
        assert_eq!(
            batch.labels(),
            &[
                TextLabel {
                    text: "score: 7".into(),
                    pos: Vec2::new(672.0, 416.0),
                },
                TextLabel {
                    text: "highscore: 21".into(),
                    pos: Vec2::new(672.0, 352.0),
                },
            ]
        );
    }

    #[test]
    fn test_each_frame_starts_empty() {
        let mut state = GameState::new(5, 0.0);
        let mut batch = SpriteBatch::new(800.0, 480.0);
        draw(&state, &mut batch);
        let one_drop = batch.vertices().len();

        state.raindrops.clear();
        draw(&state, &mut batch);
        let no_drops = batch.vertices().len();

        assert!(no_drops < one_drop);
        assert_eq!(batch.labels().len(), 2);
    }

    #[test]
    fn test_set_viewport_updates_camera() {
        let mut batch = SpriteBatch::new(1600.0, 960.0);
        batch.set_viewport(400.0, 240.0);
        assert_eq!(batch.camera().world_size, Vec2::new(400.0, 240.0));
        assert_eq!(batch.camera().viewport_size, Vec2::new(1600.0, 960.0));
    }
}
