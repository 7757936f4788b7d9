//! Spawn parameters for particles (optionally parsed from TOML)

use crate::assets::TextureHandle;
use ember_core::{Color, Point, Result, Vec2};

/// Initial state for a particle.
///
/// Texture handles come from [`crate::Assets`] and are bound by the caller;
/// TOML descriptions cover the plain value fields only.
#[derive(Debug, Clone)]
pub struct ParticleDesc {
    /// Caller-assigned label, not required to be unique
    pub id: String,
    /// Variant tag used by first/last-of-kind queries
    pub kind: &'static str,
    pub texture: Option<TextureHandle>,
    pub position: Vec2,
    pub velocity: Vec2,
    pub scale: Vec2,
    /// Rotation in radians
    pub angle: f32,
    /// Draw-order hint, clamped into [0, 1]
    pub depth: f32,
    pub color: Color,
    /// Lifetime in milliseconds
    pub lifetime_ms: i32,
    /// Pixel size of one animation cell; zero means the full texture bounds
    pub frame_size: Point,
    /// Milliseconds per animation frame step; values <= 0 advance every tick
    pub frame_speed: i32,
    /// Collision radius; <= 0 derives half the frame width
    pub radius: f32,
    pub paused: bool,
}

impl Default for ParticleDesc {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: "particle",
            texture: None,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            scale: Vec2::ONE,
            angle: 0.0,
            depth: 0.0,
            color: Color::WHITE,
            lifetime_ms: 1000,
            frame_size: Point::ZERO,
            frame_speed: 100,
            radius: 0.0,
            paused: false,
        }
    }
}

impl ParticleDesc {
    /// Parse a ParticleDesc from a TOML component table.
    ///
    /// Unknown keys are ignored and missing keys keep their defaults, the
    /// same contract data-driven components follow elsewhere in the engine.
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut desc = Self::default();

        if let Some(v) = table.get("id") {
            if let Some(s) = v.as_str() {
                desc.id = s.to_string();
            }
        }
        if let Some(v) = table.get("position") {
            desc.position = toml_vec2(v, desc.position);
        }
        if let Some(v) = table.get("velocity") {
            desc.velocity = toml_vec2(v, desc.velocity);
        }
        if let Some(v) = table.get("scale") {
            desc.scale = toml_vec2(v, desc.scale);
        }
        if let Some(v) = table.get("angle") {
            desc.angle = toml_f32(v, desc.angle);
        }
        if let Some(v) = table.get("depth") {
            desc.depth = toml_f32(v, desc.depth);
        }
        if let Some(v) = table.get("color") {
            desc.color = toml_color(v, desc.color);
        }
        if let Some(v) = table.get("lifetime_ms") {
            desc.lifetime_ms = toml_i32(v, desc.lifetime_ms);
        }
        if let Some(v) = table.get("frame_size") {
            desc.frame_size = toml_point(v, desc.frame_size);
        }
        if let Some(v) = table.get("frame_speed") {
            desc.frame_speed = toml_i32(v, desc.frame_speed);
        }
        if let Some(v) = table.get("radius") {
            desc.radius = toml_f32(v, desc.radius);
        }
        if let Some(v) = table.get("paused") {
            desc.paused = v.as_bool().unwrap_or(false);
        }

        desc
    }

    /// Parse a ParticleDesc from TOML source text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::value::Table = toml::from_str(source)?;
        Ok(Self::from_toml(&table))
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_i32(v: &toml::Value, default: i32) -> i32 {
    v.as_integer().map(|i| i as i32).unwrap_or(default)
}

fn toml_vec2(v: &toml::Value, default: Vec2) -> Vec2 {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 2 {
            return Vec2::new(toml_f32(&arr[0], default.x), toml_f32(&arr[1], default.y));
        }
    }
    default
}

fn toml_point(v: &toml::Value, default: Point) -> Point {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 2 {
            return Point::new(toml_i32(&arr[0], default.x), toml_i32(&arr[1], default.y));
        }
    }
    default
}

fn toml_color(v: &toml::Value, default: Color) -> Color {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 4 {
            return Color::new(
                toml_f32(&arr[0], default.r),
                toml_f32(&arr[1], default.g),
                toml_f32(&arr[2], default.b),
                toml_f32(&arr[3], default.a),
            );
        }
    }
    default
}
