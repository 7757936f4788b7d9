//! Lightweight xorshift32 PRNG — no external crate needed
//!
//! Each particle carries its own generator so duplicated particles diverge
//! rather than replaying one shared stream.

use ember_core::Vec2;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SEED: AtomicU32 = AtomicU32::new(0x9E37_79B9);

pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// A generator with a process-unique seed
    pub fn from_entropy() -> Self {
        // Weyl sequence over a global counter; distinct per call
        let n = NEXT_SEED.fetch_add(0x9E37_79B9, Ordering::Relaxed);
        Self::new(n ^ 0x5F35_6495)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a random unit direction vector
    pub fn direction(&mut self) -> Vec2 {
        let angle = self.range(0.0, 2.0 * std::f32::consts::PI);
        Vec2::new(angle.cos(), angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = ParticleRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!(v >= 0.0 && v < 10.0);
        }
    }

    #[test]
    fn rng_direction_unit_length() {
        let mut rng = ParticleRng::new(123);
        for _ in 0..100 {
            let d = rng.direction();
            assert!((d.length() - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn from_entropy_gives_distinct_streams() {
        let mut a = ParticleRng::from_entropy();
        let mut b = ParticleRng::from_entropy();
        let same = (0..8).all(|_| a.next_u32() == b.next_u32());
        assert!(!same);
    }
}
