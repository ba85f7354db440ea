//! Effective bounds and value snapping.
//!
//! Raw `min`/`max`/`step` are whatever the host wrote. Everything the engine
//! computes goes through [`EffectiveBounds`], which is always ordered and has
//! a positive step.

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;

/// Highest decimal precision used when removing floating point drift.
const MAX_PRECISION: usize = 15;
/// Slack for `x / step` quotients that land just below an integer.
const INDEX_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectiveBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for EffectiveBounds {
    fn default() -> Self {
        Self::compute(DEFAULT_MIN, DEFAULT_MAX, DEFAULT_STEP)
    }
}

impl EffectiveBounds {
    /// Orders `min`/`max` and sanitizes `step`. Never fails: non-finite
    /// bounds take their defaults, a non-finite or zero step becomes `1`.
    pub fn compute(min: f64, max: f64, step: f64) -> Self {
        let min = if min.is_finite() { min } else { DEFAULT_MIN };
        let max = if max.is_finite() { max } else { DEFAULT_MAX };
        let step = if step.is_finite() && step != 0.0 {
            step.abs()
        } else {
            DEFAULT_STEP
        };
        Self {
            min: min.min(max),
            max: min.max(max),
            step,
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Snaps `value` to the nearest step from `min` (ties round up), then
    /// clamps. When the step does not divide the range, `max` itself is
    /// reached by rounding past it.
    pub fn stepify(&self, value: f64) -> f64 {
        let value = self.clamp(value);
        let index = ((value - self.min) / self.step + 0.5).floor();
        let snapped = round_to(self.min + index * self.step, self.precision());
        self.clamp(snapped)
    }

    /// Number of step positions between `min` and `max`, both included.
    /// Saturates at `usize::MAX` for ranges too large to count.
    pub fn tick_count(&self) -> usize {
        // float to int `as` saturates, and NaN becomes 0
        (self.last_step_index() as usize).saturating_add(1)
    }

    /// Index of the last on-step position that does not exceed `max`.
    pub fn last_step_index(&self) -> f64 {
        (self.span() / self.step + INDEX_EPSILON).floor().max(0.0)
    }

    /// Position of `value` along the track as a fraction of `[0, 1]`.
    pub fn ratio_of(&self, value: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            ((self.clamp(value) - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn value_at(&self, ratio: f64) -> f64 {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        self.clamp(self.min + ratio * self.span())
    }

    /// Decimal places needed to represent values on this step grid.
    pub fn precision(&self) -> usize {
        decimal_places(self.step).max(decimal_places(self.min))
    }

    /// Decimal places of the step alone; labels are formatted with it.
    pub fn step_precision(&self) -> usize {
        decimal_places(self.step)
    }
}

pub fn decimal_places(x: f64) -> usize {
    if !x.is_finite() {
        return 0;
    }
    // f64's Display never switches to exponent notation
    let s = x.abs().to_string();
    s.split_once('.')
        .map_or(0, |(_, frac)| frac.len())
        .min(MAX_PRECISION)
}

pub fn round_to(x: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: f64, max: f64, step: f64) -> EffectiveBounds {
        EffectiveBounds::compute(min, max, step)
    }

    #[test]
    fn test_bounds_are_ordered() {
        for (min, max) in [(0.0, 10.0), (100.0, 10.0), (-5.0, -50.0), (3.0, 3.0)] {
            let b = bounds(min, max, 1.0);
            assert!(b.min <= b.max, "{min}..{max}");
            assert_eq!(b.min, min.min(max));
            assert_eq!(b.max, min.max(max));
        }
    }

    #[test]
    fn test_effective_step() {
        assert_eq!(bounds(0.0, 10.0, 2.5).step, 2.5);
        assert_eq!(bounds(0.0, 10.0, -7.0).step, 7.0);
        assert_eq!(bounds(0.0, 10.0, 0.0).step, 1.0);
        assert_eq!(bounds(0.0, 10.0, f64::NAN).step, 1.0);
        assert_eq!(bounds(0.0, 10.0, f64::INFINITY).step, 1.0);
        assert_eq!(bounds(0.0, 10.0, f64::NEG_INFINITY).step, 1.0);
    }

    #[test]
    fn test_non_finite_bounds_take_defaults() {
        let b = bounds(f64::NAN, f64::INFINITY, 1.0);
        assert_eq!((b.min, b.max), (DEFAULT_MIN, DEFAULT_MAX));
    }

    #[test]
    fn test_clamp() {
        let b = bounds(100.0, 10.0, 1.0);
        assert_eq!(b.clamp(300.0), 100.0);
        assert_eq!(b.clamp(0.0), 10.0);
        assert_eq!(b.clamp(42.5), 42.5);
        assert_eq!(b.clamp(f64::NAN), 10.0);
        assert_eq!(b.clamp(f64::NEG_INFINITY), 10.0);
    }

    #[test]
    fn test_clamp_idempotent() {
        let b = bounds(-12.5, 47.5, 1.25);
        for x in [-1e9, -12.5, -3.3, 0.0, 21.25, 47.5, 47.6, 1e9] {
            assert_eq!(b.clamp(b.clamp(x)), b.clamp(x));
        }
    }

    #[test]
    fn test_stepify_rounds_half_up() {
        let b = bounds(0.0, 10.0, 1.0);
        assert_eq!(b.stepify(2.5), 3.0);
        assert_eq!(b.stepify(2.49), 2.0);
        assert_eq!(b.stepify(-4.0), 0.0);
        assert_eq!(b.stepify(11.0), 10.0);
    }

    #[test]
    fn test_stepify_from_min() {
        let b = bounds(-20.0, 20.0, -7.0);
        // -20 + 3 * 7
        assert_eq!(b.stepify(0.0), 1.0);

        let b = bounds(-12.5, 47.5, 1.25);
        assert_eq!(b.stepify(12.504), 12.5);
        assert_eq!(b.stepify(13.2), 13.75);
    }

    #[test]
    fn test_stepify_reaches_off_grid_max() {
        let b = bounds(0.0, 10.0, 4.0);
        // 10 rounds to 12 and clamps back to the maximum
        assert_eq!(b.stepify(10.0), 10.0);
        assert_eq!(b.stepify(9.9), 8.0);
        assert_eq!(b.stepify(6.0), 8.0);

        let b = bounds(0.0, 9.0, 4.0);
        assert_eq!(b.stepify(9.0), 8.0);

        let b = bounds(0.3, 7.1, 0.7);
        for i in 0..200 {
            let x = -1.0 + i as f64 * 0.05;
            let v = b.stepify(x);
            let k = (v - b.min) / b.step;
            assert!(v == b.max || (k - k.round()).abs() < 1e-9, "{x} -> {v}");
        }
    }

    #[test]
    fn test_stepify_removes_drift() {
        let b = bounds(0.0, 1.0, 0.1);
        assert_eq!(b.stepify(0.3), 0.3);
        assert_eq!(b.stepify(0.1 + 0.2), 0.3);
        assert_eq!(b.stepify(0.7 + 0.1), 0.8);
    }

    #[test]
    fn test_tick_count() {
        assert_eq!(bounds(0.0, 10.0, 1.0).tick_count(), 11);
        assert_eq!(bounds(-20.0, 20.0, 2.0).tick_count(), 21);
        assert_eq!(bounds(0.0, 0.3, 0.1).tick_count(), 4);
        assert_eq!(bounds(0.0, 10.0, 3.0).tick_count(), 4);
        assert_eq!(bounds(5.0, 5.0, 1.0).tick_count(), 1);
    }

    #[test]
    fn test_tick_count_saturates() {
        assert_eq!(bounds(0.0, 1e20, 1.0).tick_count(), usize::MAX);
        // the span itself overflows to infinity
        assert_eq!(bounds(-1e308, 1e308, 1.0).tick_count(), usize::MAX);
    }

    #[test]
    fn test_ratio_mapping() {
        let b = bounds(0.0, 10.0, 1.0);
        assert_eq!(b.ratio_of(3.0), 0.3);
        assert_eq!(b.value_at(0.5), 5.0);
        assert_eq!(b.value_at(2.0), 10.0);
        assert_eq!(bounds(4.0, 4.0, 1.0).ratio_of(4.0), 0.0);
    }

    #[test]
    fn test_precision() {
        assert_eq!(decimal_places(1.25), 2);
        assert_eq!(decimal_places(-7.0), 0);
        assert_eq!(decimal_places(0.0000001), 7);
        assert_eq!(bounds(-12.5, 47.5, 1.25).precision(), 2);
        assert_eq!(bounds(0.05, 1.0, 1.0).precision(), 2);
        assert_eq!(bounds(0.05, 1.0, 1.0).step_precision(), 0);
        assert_eq!(round_to(0.30000000000000004, 1), 0.3);
    }
}
