//! Animatable value types
//!
//! Provides linear interpolation and the clamped range mapping that turns
//! scroll progress into animation parameters.

use serde::{Deserialize, Serialize};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// The normalized position is clamped to `[0, 1]` before scaling, so values
/// outside the input window hold the nearest endpoint. A degenerate input
/// window behaves as a step at `in_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    let t = if span.abs() <= f32::EPSILON {
        if value >= in_min {
            1.0
        } else {
            0.0
        }
    } else {
        ((value - in_min) / span).clamp(0.0, 1.0)
    };
    out_min.lerp(&out_max, t)
}

/// A clamped piecewise-linear segment: input window → output window
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeMap {
    /// Input window `[start, end]`
    pub input: [f32; 2],
    /// Output values at the input window's start and end
    pub output: [f32; 2],
}

impl RangeMap {
    pub const fn new(input: [f32; 2], output: [f32; 2]) -> Self {
        Self { input, output }
    }

    /// Sample the mapping at `value`
    pub fn sample(&self, value: f32) -> f32 {
        map_range(
            value,
            self.input[0],
            self.input[1],
            self.output[0],
            self.output[1],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_map_range_clamps_outside_window() {
        assert_eq!(map_range(-1.0, 0.0, 0.2, 1.0, 0.0), 1.0);
        assert_eq!(map_range(0.5, 0.0, 0.2, 1.0, 0.0), 0.0);
        assert!((map_range(0.1, 0.0, 0.2, 1.0, 0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_map_range_degenerate_window() {
        assert_eq!(map_range(0.4, 0.5, 0.5, 0.0, 1.0), 0.0);
        assert_eq!(map_range(0.5, 0.5, 0.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_range_map_fade_in() {
        let fade = RangeMap::new([0.6, 0.9], [0.0, 1.0]);
        assert_eq!(fade.sample(0.0), 0.0);
        assert!((fade.sample(0.75) - 0.5).abs() < 1e-5);
        assert_eq!(fade.sample(1.0), 1.0);
    }
}
