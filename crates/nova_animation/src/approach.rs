//! Per-frame exponential approach
//!
//! Each [`Approach::step`] closes a fixed fraction of the remaining distance
//! to the target and then adds a constant bias. With a zero bias this is the
//! classic "ease towards" used for camera follow; a positive bias keeps the
//! value moving when the eased delta becomes tiny.

/// An exponentially eased value
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Approach {
    value: f32,
    target: f32,
    /// Fraction of the remaining distance covered per step
    factor: f32,
    /// Constant added after easing (signed, in value units)
    bias: f32,
}

impl Approach {
    pub fn new(initial: f32, factor: f32) -> Self {
        Self {
            value: initial,
            target: initial,
            factor: factor.clamp(0.0, 1.0),
            bias: 0.0,
        }
    }

    /// Add a constant per-step bias
    pub fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Remaining signed distance (`target - value`)
    pub fn remaining(&self) -> f32 {
        self.target - self.value
    }

    /// Advance one frame
    pub fn step(&mut self) -> f32 {
        self.value += self.remaining() * self.factor + self.bias;
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_closes_fraction() {
        let mut a = Approach::new(60.0, 0.08);
        a.set_target(1260.0);
        a.step();
        assert!((a.value() - 156.0).abs() < 1e-3);
    }

    #[test]
    fn test_converges_monotonically_without_bias() {
        let mut a = Approach::new(0.0, 0.08);
        a.set_target(100.0);
        let mut last = a.value();
        for _ in 0..200 {
            let v = a.step();
            assert!(v >= last);
            assert!(v <= 100.0);
            last = v;
        }
        assert!(a.remaining() < 0.01);
    }

    #[test]
    fn test_bias_reaches_target_within_bound() {
        let mut a = Approach::new(-40.0, 0.15).with_bias(0.2);
        a.set_target(10.0);
        // Without bias: 50 * 0.85^n < 1 needs 25 steps
        let mut steps = 0;
        while a.remaining() >= 1.0 {
            a.step();
            steps += 1;
        }
        assert!(steps <= 25, "took {} steps", steps);
    }
}
