//! Timing curves applied to a transition's linear progress.

use serde::{Deserialize, Serialize};

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// Material "standard" curve: quick departure, gentle arrival.
    FastOutSlowIn,
    /// Cubic Bézier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`, `(1, 1)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Easing {
    /// Eased progress for linear progress `fraction`, clamped to `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self.curve() {
            Some(curve) => curve.progress_at(fraction),
            None => fraction,
        }
    }

    fn curve(&self) -> Option<TimingCurve> {
        let (x1, y1, x2, y2) = match *self {
            Easing::Linear => return None,
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Easing::FastOutSlowIn => (0.4, 0.0, 0.2, 1.0),
            Easing::CubicBezier { x1, y1, x2, y2 } => (x1, y1, x2, y2),
        };
        Some(TimingCurve::new(x1, y1, x2, y2))
    }
}

/// Largest horizontal miss accepted when inverting the curve.
const TIME_TOLERANCE: f32 = 1e-5;
const MAX_SOLVER_STEPS: usize = 24;

/// One axis of a Bézier through `0` and `1`, in power form `((a·t + b)·t + c)·t`.
#[derive(Debug, Clone, Copy)]
struct Cubic {
    a: f32,
    b: f32,
    c: f32,
}

impl Cubic {
    fn through(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - 2.0 * p1);
        Self {
            a: 1.0 - b - c,
            b,
            c,
        }
    }

    fn at(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn derivative(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

/// Timing curve from `(0, 0)` to `(1, 1)`. Horizontal control points are
/// kept within `[0, 1]` so time never runs backwards.
#[derive(Debug, Clone, Copy)]
struct TimingCurve {
    time: Cubic,
    progress: Cubic,
}

impl TimingCurve {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            time: Cubic::through(x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0)),
            progress: Cubic::through(y1, y2),
        }
    }

    fn progress_at(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 || fraction >= 1.0 {
            return fraction;
        }
        self.progress.at(self.parameter_for(fraction))
    }

    /// Curve parameter whose time coordinate is `fraction`.
    ///
    /// Newton steps inside a shrinking bracket; a step leaving the bracket,
    /// or a flat tangent, falls back to halving it.
    fn parameter_for(&self, fraction: f32) -> f32 {
        let (mut low, mut high) = (0.0f32, 1.0f32);
        let mut t = fraction;
        for _ in 0..MAX_SOLVER_STEPS {
            let miss = self.time.at(t) - fraction;
            if miss.abs() <= TIME_TOLERANCE {
                break;
            }
            if miss > 0.0 {
                high = t;
            } else {
                low = t;
            }
            let slope = self.time.derivative(t);
            let newton = if slope.abs() > f32::EPSILON {
                t - miss / slope
            } else {
                f32::NAN
            };
            t = if newton > low && newton < high {
                newton
            } else {
                0.5 * (low + high)
            };
        }
        t
    }
}
