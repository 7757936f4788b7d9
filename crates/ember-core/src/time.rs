//! Per-tick elapsed time

use std::time::Duration;

/// One tick's elapsed wall-clock time.
///
/// The simulation consumes elapsed time in two units: fractional seconds for
/// position integration and whole milliseconds for lifetime countdown and
/// animation stepping. Both views must describe the same tick, so they are
/// derived together from a single `Duration` at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    seconds: f32,
    millis: i32,
}

impl FrameTime {
    pub fn from_duration(elapsed: Duration) -> Self {
        Self {
            seconds: elapsed.as_secs_f32(),
            millis: elapsed.as_millis() as i32,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::from_duration(Duration::from_millis(millis))
    }

    /// Elapsed time in fractional seconds
    pub fn seconds(&self) -> f32 {
        self.seconds
    }

    /// Elapsed time in whole milliseconds
    pub fn millis(&self) -> i32 {
        self.millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_and_millis_describe_the_same_tick() {
        let t = FrameTime::from_millis(500);
        assert!((t.seconds() - 0.5).abs() < 1e-6);
        assert_eq!(t.millis(), 500);
    }

    #[test]
    fn from_duration_truncates_to_whole_millis() {
        let t = FrameTime::from_duration(Duration::from_micros(16_700));
        assert_eq!(t.millis(), 16);
        assert!((t.seconds() - 0.0167).abs() < 1e-4);
    }
}
