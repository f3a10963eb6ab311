//! Easing curves mapping normalized progress `[0, 1]` to eased progress.
//!
//! Named curves match the CSS keywords of the same name and are evaluated
//! through a cubic-bezier solver.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Easing curve applied to a transition's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// CSS `ease`: quick start, long settle.
    #[default]
    Ease,
    /// CSS `ease-out`: decelerates into the target.
    EaseOut,
    /// CSS `ease-in-out`: symmetric acceleration and deceleration.
    EaseInOut,
    /// Arbitrary `cubic-bezier(x1, y1, x2, y2)`.
    Bezier(CubicBezier),
}

impl Easing {
    /// Apply the curve to `t`, clamping the input to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Ease => CubicBezier::EASE.apply(t),
            Self::EaseOut => CubicBezier::EASE_OUT.apply(t),
            Self::EaseInOut => CubicBezier::EASE_IN_OUT.apply(t),
            Self::Bezier(curve) => curve.apply(t),
        }
    }
}

/// A CSS-style cubic bezier with fixed endpoints `(0, 0)` and `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f64 = 1e-7;
const BISECTION_ITERATIONS: usize = 32;

impl CubicBezier {
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);
    pub const EASE_OUT: Self = Self::new(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: Self = Self::new(0.42, 0.0, 0.58, 1.0);

    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased value at time fraction `x`.
    #[must_use]
    pub fn apply(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let s = self.solve_param(x);
        sample(self.y1, self.y2, s)
    }

    /// Find the curve parameter whose x-coordinate equals `x`.
    ///
    /// `x1`/`x2` outside `[0, 1]` are clamped so the curve stays a function
    /// of time.
    fn solve_param(&self, x: f64) -> f64 {
        let x1 = self.x1.clamp(0.0, 1.0);
        let x2 = self.x2.clamp(0.0, 1.0);
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(x1, x2, s) - x;
            if err.abs() < NEWTON_EPSILON {
                return s;
            }
            let d = slope(x1, x2, s);
            if d.abs() < NEWTON_EPSILON {
                break;
            }
            s = (s - err / d).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = sample(x1, x2, s);
            if (value - x).abs() < NEWTON_EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        s
    }
}

/// One coordinate of the bezier at parameter `s` with control values `a`, `b`.
#[inline]
fn sample(a: f64, b: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
}

#[inline]
fn slope(a: f64, b: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
}
