//! Easing curves for tweens.
//!
//! A timing function maps normalized time in `[0, 1]` to normalized progress.
//! Opacity fades run linearly, the snap transition uses
//! [`TimingFunction::snap`].

use std::fmt;
use std::sync::Arc;

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-6;

#[derive(Clone)]
pub enum TimingFunction {
    Linear,
    Bezier(CubicBezier),
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Deceleration curve the controller settles with
    pub fn snap() -> Self {
        Self::cubic_bezier(0.33, 1.0, 0.68, 1.0)
    }

    pub fn ease_in() -> Self {
        Self::cubic_bezier(0.42, 0.0, 1.0, 1.0)
    }

    pub fn ease_out() -> Self {
        Self::cubic_bezier(0.0, 0.0, 0.58, 1.0)
    }

    pub fn ease_in_out() -> Self {
        Self::cubic_bezier(0.42, 0.0, 0.58, 1.0)
    }

    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        TimingFunction::Bezier(CubicBezier::new(x1, y1, x2, y2))
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }

    /// Progress at time `t`; `t` is clamped to `[0, 1]`
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::Bezier(curve) => curve.solve(t),
            TimingFunction::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Linear => f.write_str("Linear"),
            TimingFunction::Bezier(curve) => fmt::Debug::fmt(curve, f),
            TimingFunction::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A bezier curve from (0, 0) to (1, 1) shaped by two control points.
///
/// Each axis is kept in polynomial form `((a * t + b) * t + c) * t`.
#[derive(Clone, Copy, PartialEq)]
pub struct CubicBezier {
    controls: [f32; 4],
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        // x must stay monotonic for the curve to be a function of time
        let x1 = x1.clamp(0.0, 1.0);
        let x2 = x2.clamp(0.0, 1.0);
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            controls: [x1, y1, x2, y2],
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    pub fn controls(&self) -> [f32; 4] {
        self.controls
    }

    fn sample_x(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn slope_x(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Curve parameter whose x equals `x`
    fn parameter_for(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = self.sample_x(t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = self.slope_x(t);
            if slope.abs() < EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        // Flat slope or no convergence
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let error = self.sample_x(t) - x;
            if error.abs() < EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }

    /// Progress at `x`, exact at both ends
    pub fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            self.sample_y(self.parameter_for(x))
        }
    }
}

impl fmt::Debug for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x1, y1, x2, y2] = self.controls;
        write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        for t in [0.0, 0.3, 1.0] {
            assert_eq!(TimingFunction::Linear.evaluate(t), t);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(TimingFunction::Linear.evaluate(-0.5), 0.0);
        assert_eq!(TimingFunction::ease_in_out().evaluate(1.5), 1.0);
    }

    #[test]
    fn test_presets_bend_the_right_way() {
        assert!(TimingFunction::ease_in().evaluate(0.5) < 0.5);
        assert!(TimingFunction::ease_out().evaluate(0.5) > 0.5);
        let middle = TimingFunction::ease_in_out().evaluate(0.5);
        assert!((middle - 0.5).abs() < 1e-3, "got {}", middle);
    }

    #[test]
    fn test_snap_curve_endpoints_are_exact() {
        assert_eq!(TimingFunction::snap().evaluate(0.0), 0.0);
        assert_eq!(TimingFunction::snap().evaluate(1.0), 1.0);
    }

    #[test]
    fn test_snap_curve_decelerates() {
        let quarter = TimingFunction::snap().evaluate(0.25);
        assert!(quarter > 0.5, "expected fast start, got {}", quarter);
    }

    #[test]
    fn test_snap_curve_is_monotonic() {
        let snap = TimingFunction::snap();
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = snap.evaluate(i as f32 / 100.0);
            assert!(value + 1e-5 >= previous, "not monotonic at step {}", i);
            previous = value;
        }
    }

    #[test]
    fn test_diagonal_handles_are_linear() {
        let curve = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((curve.solve(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_out_of_range_x_handles_are_clamped() {
        let curve = CubicBezier::new(-1.0, 0.0, 2.0, 1.0);
        assert_eq!(curve.controls(), [0.0, 0.0, 1.0, 1.0]);
        assert!(curve.solve(0.5).is_finite());
    }

    #[test]
    fn test_custom() {
        let step = TimingFunction::custom(|t| if t < 0.5 { 0.0 } else { 1.0 });
        assert_eq!(step.evaluate(0.25), 0.0);
        assert_eq!(step.evaluate(0.75), 1.0);
        assert_eq!(format!("{:?}", TimingFunction::snap()), "cubic-bezier(0.33, 1, 0.68, 1)");
    }
}
