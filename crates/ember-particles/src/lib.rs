//! Ember Particles - CPU sprite particle simulation core
//!
//! Manages the lifecycle, motion, animation, and grouping of many
//! short-lived visual entities driven by a per-frame tick:
//! - Per-particle Euler integration, millisecond lifetime countdown, and
//!   sprite-sheet frame stepping
//! - An ordered, group-addressed collection with safe removal while
//!   iterating and add/death notifications
//! - Distance-based containment/intersection queries for game logic
//! - A process-wide live-particle count kept by activity transitions
//!
//! Rendering and asset loading stay outside: the host supplies a
//! [`RenderSurface`] and an [`Assets`] context at the boundary.

pub mod assets;
pub mod count;
pub mod desc;
pub mod manager;
pub mod particle;
pub mod rand;
pub mod surface;

pub use assets::{Assets, TextureHandle};
pub use desc::ParticleDesc;
pub use manager::ParticleManager;
pub use particle::Particle;
pub use surface::{RecordedSprite, RecordingSurface, RenderSurface, SpriteParams};

pub use ember_core::{Color, FrameTime, Point, Rect, Vec2};
