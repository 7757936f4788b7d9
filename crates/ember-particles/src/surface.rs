//! Render boundary: the draw-sprite capability the host supplies

use crate::assets::TextureHandle;
use ember_core::{Color, Rect, Vec2};

/// One textured, tinted, rotated, scaled quad at a depth hint
pub struct SpriteParams<'a> {
    pub texture: &'a TextureHandle,
    pub position: Vec2,
    /// Pixel sub-region of the texture (the current animation cell)
    pub source: Rect,
    pub color: Color,
    pub angle: f32,
    pub origin: Vec2,
    pub scale: Vec2,
    /// Draw-order hint in [0, 1]
    pub depth: f32,
}

/// Capability implemented by the host's rendering backend.
///
/// The simulation only emits draw requests; batching, texture sampling, and
/// submission order are the backend's concern.
pub trait RenderSurface {
    fn draw_sprite(&mut self, sprite: SpriteParams<'_>);
}

/// A headless surface that records every draw request.
///
/// Used by tests and by hosts that want to inspect what a frame would draw
/// without a GPU backend.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<RecordedSprite>,
}

/// Owned snapshot of one `draw_sprite` request
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSprite {
    pub texture: String,
    pub position: Vec2,
    pub source: Rect,
    pub color: Color,
    pub angle: f32,
    pub origin: Vec2,
    pub scale: Vec2,
    pub depth: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_sprite(&mut self, sprite: SpriteParams<'_>) {
        self.calls.push(RecordedSprite {
            texture: sprite.texture.name.clone(),
            position: sprite.position,
            source: sprite.source,
            color: sprite.color,
            angle: sprite.angle,
            origin: sprite.origin,
            scale: sprite.scale,
            depth: sprite.depth,
        });
    }
}
