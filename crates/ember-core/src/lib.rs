//! Ember Core - Foundational types for the Ember particle engine
//!
//! This crate provides the types every other Ember crate depends on:
//! - `Vec2`, `Point`, `Rect` - 2D spatial types
//! - `Color` - RGBA color
//! - `FrameTime` - one tick's elapsed time in seconds and whole milliseconds
//! - Error types and Result alias

mod error;
mod time;
mod types;

pub use error::{EmberError, Result};
pub use time::FrameTime;
pub use types::{Color, Point, Rect, Vec2};
